use std::env;
use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use silvertrail_api::routes;
use silvertrail_api::services::chat_client::{ChatClient, ChatConfig};
use silvertrail_api::services::checklist_store::ChecklistStore;
use silvertrail_api::services::media_service::MediaService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let chat_config = match ChatConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Chat API configuration error: {}", err);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()));
        }
    };
    let chat_client = ChatClient::new(chat_config);
    let store = ChecklistStore::from_env();
    let media = MediaService::new();

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(chat_client.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(media.clone()))
            .route("/health", web::get().to(routes::health::health))
            .service(
                web::scope("/api")
                    .route("/options", web::get().to(routes::options::get_options))
                    .route(
                        "/recommendations",
                        web::post().to(routes::recommendation::recommend),
                    )
                    .route("/itineraries", web::post().to(routes::itinerary::plan))
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
                    )
                    .route("/stories", web::post().to(routes::story::generate_story))
                    .route("/videos", web::post().to(routes::story::compose_video)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
