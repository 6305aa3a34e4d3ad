use actix_web::{web, HttpResponse, Responder};

use crate::models::checklist::CheckedState;
use crate::models::requests::ChecklistRequest;
use crate::services::chat_client::ChatClient;
use crate::services::checklist_extractor::extract_checklist;
use crate::services::checklist_renderer::render_checklist;
use crate::services::checklist_store::{ChecklistStore, ChecklistStoreError};
use crate::services::prompts;
use crate::services::sanitizer::sanitize_response;

/*
    POST /api/checklists

    The full pipeline: generate -> sanitize -> extract -> save -> render.
    A reply that cannot be parsed is surfaced to the user raw, never dropped.
*/
pub async fn generate(
    body: web::Json<ChecklistRequest>,
    client: web::Data<ChatClient>,
    store: web::Data<ChecklistStore>,
) -> impl Responder {
    let req = body.into_inner();
    if req.destination.trim().is_empty() || req.duration.trim().is_empty() {
        return HttpResponse::BadRequest().body("Destination and duration are required");
    }

    let special_needs = req.special_needs_clause();
    let prompt = prompts::checklist_prompt(&req.destination, &req.duration, &special_needs);

    let raw = match client.complete(&prompt.system, &prompt.user, prompt.sampling).await {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Failed to generate checklist: {}", err);
            return HttpResponse::BadGateway().body(format!("Failed to generate checklist: {}", err));
        }
    };

    let cleaned = sanitize_response(&raw);
    if cleaned.is_empty() {
        return HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("Sorry, no checklist could be generated right now. Please try again later.");
    }

    let data = match extract_checklist(&cleaned) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Checklist reply could not be parsed: {}", err.reason);
            return HttpResponse::UnprocessableEntity()
                .content_type("text/plain; charset=utf-8")
                .body(format!(
                    "⚠️ The generated checklist could not be parsed. Raw reply:\n\n{}",
                    err.raw_text
                ));
        }
    };

    let record = match store.save(&req.destination, &req.duration, data) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("Failed to save checklist: {}", err);
            return HttpResponse::InternalServerError().body("Failed to save checklist");
        }
    };

    let checked = store.load_checked_state(&record.id);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_checklist(&record, &checked))
}

/*
    GET /api/checklists
*/
pub async fn list(store: web::Data<ChecklistStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list())
}

/*
    GET /api/checklists/{filename}
*/
pub async fn get_by_key(path: web::Path<String>, store: web::Data<ChecklistStore>) -> impl Responder {
    let filename = path.into_inner();
    match store.load(&filename) {
        Ok(record) => {
            let checked = store.load_checked_state(&record.id);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(render_checklist(&record, &checked))
        }
        Err(ChecklistStoreError::RecordNotFound(_)) => {
            HttpResponse::NotFound().body("Checklist record not found or already deleted")
        }
        Err(err) => {
            eprintln!("Failed to load checklist {}: {}", filename, err);
            HttpResponse::InternalServerError().body("Failed to load checklist record")
        }
    }
}

/*
    DELETE /api/checklists/{filename}

    Returns whether the record existed. The sibling checked-state file is
    left in place; an orphan there is an accepted inconsistency.
*/
pub async fn delete_by_key(
    path: web::Path<String>,
    store: web::Data<ChecklistStore>,
) -> impl Responder {
    let deleted = store.delete(&path.into_inner());
    HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted }))
}

/*
    PUT /api/checklists/{id}/checked
*/
pub async fn update_checked(
    path: web::Path<String>,
    body: web::Json<CheckedState>,
    store: web::Data<ChecklistStore>,
) -> impl Responder {
    let id = path.into_inner();
    let checked = body.into_inner().checked.into_iter().collect();
    match store.save_checked_state(&id, &checked) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"status": "saved"})),
        Err(err) => {
            eprintln!("Failed to save checked state for {}: {}", id, err);
            HttpResponse::InternalServerError().body("Failed to save checked state")
        }
    }
}
