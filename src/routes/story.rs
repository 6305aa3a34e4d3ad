use actix_web::{web, HttpResponse, Responder};

use crate::models::requests::{StoryRequest, VideoRequest};
use crate::services::chat_client::ChatClient;
use crate::services::media_service::{Animation, MediaError, MediaService, VideoOptions};
use crate::services::prompts;
use crate::services::sanitizer::sanitize_response;

/*
    POST /api/stories
*/
pub async fn generate_story(
    body: web::Json<StoryRequest>,
    client: web::Data<ChatClient>,
) -> impl Responder {
    let req = body.into_inner();
    if req.custom_input.trim().is_empty() {
        return HttpResponse::BadRequest()
            .body("Please upload photos and fill in the trip notes first");
    }

    let prompt = prompts::story_prompt(&req.custom_input, &req.photo_names);

    match client.complete(&prompt.system, &prompt.user, prompt.sampling).await {
        Ok(text) => {
            let cleaned = sanitize_response(&text);
            if cleaned.is_empty() {
                return HttpResponse::Ok()
                    .content_type("text/plain; charset=utf-8")
                    .body("Sorry, no narrative could be generated. Please add a few more notes.");
            }
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(cleaned)
        }
        Err(err) => {
            eprintln!("Failed to generate travel story: {}", err);
            HttpResponse::BadGateway().body(format!("Failed to generate travel story: {}", err))
        }
    }
}

/*
    POST /api/videos
*/
pub async fn compose_video(
    body: web::Json<VideoRequest>,
    media: web::Data<MediaService>,
) -> impl Responder {
    let req = body.into_inner();
    let animation = match Animation::parse(req.animation.as_deref()) {
        Ok(animation) => animation,
        Err(err) => {
            return HttpResponse::BadRequest().body(format!("Invalid video request: {}", err))
        }
    };

    let defaults = VideoOptions::default();
    let options = VideoOptions {
        fps: req.fps.unwrap_or(defaults.fps),
        duration_per_image: req.duration_per_image.unwrap_or(defaults.duration_per_image),
        transition_duration: req
            .transition_duration
            .unwrap_or(defaults.transition_duration),
        animation,
    };

    match media
        .compose_video(&req.image_paths, req.audio_path.as_deref(), &options)
        .await
    {
        Ok(path) => HttpResponse::Ok().json(serde_json::json!({
            "video_path": path.to_string_lossy()
        })),
        Err(MediaError::MissingInput(msg)) => {
            HttpResponse::BadRequest().body(format!("Invalid video request: {}", msg))
        }
        Err(err) => {
            eprintln!("Failed to compose video: {}", err);
            HttpResponse::InternalServerError().body(format!("Failed to compose video: {}", err))
        }
    }
}
