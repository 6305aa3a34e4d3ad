use std::collections::HashSet;

use actix_web::{test, web, App};
use tempfile::TempDir;

use silvertrail_api::models::checklist::{
    ChecklistCategory, ChecklistData, ChecklistItem, ChecklistSummary,
};
use silvertrail_api::routes;
use silvertrail_api::services::chat_client::{ChatClient, ChatConfig};
use silvertrail_api::services::checklist_store::ChecklistStore;
use silvertrail_api::services::media_service::MediaService;

fn test_chat_client() -> ChatClient {
    // Points at a closed local port; only used by handlers that validate
    // their input before ever touching the network.
    ChatClient::new(ChatConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
    })
}

fn sample_data() -> ChecklistData {
    ChecklistData {
        categories: vec![ChecklistCategory {
            name: "Documents".to_string(),
            items: vec![ChecklistItem {
                name: "Passport".to_string(),
                required: true,
                note: String::new(),
            }],
        }],
        ..Default::default()
    }
}

macro_rules! test_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_chat_client()))
                .app_data(web::Data::new($store.clone()))
                .route("/health", web::get().to(routes::health::health))
                .service(
                    web::scope("/api")
                        .route("/options", web::get().to(routes::options::get_options))
                        .service(
                            web::scope("/checklists")
                                .route("", web::post().to(routes::checklist::generate))
                                .route("", web::get().to(routes::checklist::list))
                                .route(
                                    "/{id}/checked",
                                    web::put().to(routes::checklist::update_checked),
                                )
                                .route("/{filename}", web::get().to(routes::checklist::get_by_key))
                                .route(
                                    "/{filename}",
                                    web::delete().to(routes::checklist::delete_by_key),
                                ),
                        ),
                ),
        )
    };
}

#[actix_web::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let app = test_app!(store).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
}

#[actix_web::test]
async fn test_options_endpoint() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let app = test_app!(store).await;

    let req = test::TestRequest::get().uri("/api/options").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["interests"].as_array().unwrap().len() >= 10);
    assert!(body["health_focus"].as_array().unwrap().len() >= 10);
    assert_eq!(body["seasons"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_generate_rejects_blank_destination() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let app = test_app!(store).await;

    let req = test::TestRequest::post()
        .uri("/api/checklists")
        .set_json(serde_json::json!({
            "destination": "  ",
            "duration": "3-5 days"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_list_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let app = test_app!(store).await;

    let req = test::TestRequest::get().uri("/api/checklists").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Vec<ChecklistSummary> = test::read_body_json(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_stored_record_is_listed_and_rendered() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let record = store.save("Kyoto", "About a week", sample_data()).unwrap();
    let app = test_app!(store).await;

    let req = test::TestRequest::get().uri("/api/checklists").to_request();
    let body: Vec<ChecklistSummary> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].destination, "Kyoto");

    let req = test::TestRequest::get()
        .uri(&format!("/api/checklists/{}", body[0].filename))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Kyoto (About a week)"));
    assert!(html.contains(&record.id));
}

#[actix_web::test]
async fn test_get_missing_record_is_404() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let app = test_app!(store).await;

    let req = test::TestRequest::get()
        .uri("/api/checklists/absent.json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_reports_whether_the_record_existed() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let record = store.save("Dali", "3-5 days", sample_data()).unwrap();
    let app = test_app!(store).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/checklists/{}.json", record.id))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["deleted"], true);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/checklists/{}.json", record.id))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["deleted"], false);
}

#[actix_web::test]
async fn test_video_request_with_unknown_animation_is_400() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(MediaService::new()))
            .route("/api/videos", web::post().to(routes::story::compose_video)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/videos")
        .set_json(serde_json::json!({
            "image_paths": ["photo.png"],
            "animation": "wipe"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("wipe"));
}

#[actix_web::test]
async fn test_checked_state_is_persisted_and_rendered() {
    let dir = TempDir::new().unwrap();
    let store = ChecklistStore::new(dir.path());
    let record = store.save("Sanya", "3-5 days", sample_data()).unwrap();
    let app = test_app!(store).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/checklists/{}/checked", record.id))
        .set_json(serde_json::json!({
            "checked": [format!("{}_0", record.id)]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let mut expected = HashSet::new();
    expected.insert(format!("{}_0", record.id));
    assert_eq!(store.load_checked_state(&record.id), expected);

    let req = test::TestRequest::get()
        .uri(&format!("/api/checklists/{}.json", record.id))
        .to_request();
    let html =
        String::from_utf8(test::read_body(test::call_service(&app, req).await).await.to_vec())
            .unwrap();
    assert!(html.contains("1 / 1 (100%)"));
}
