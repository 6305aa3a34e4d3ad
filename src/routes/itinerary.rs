use actix_web::{web, HttpResponse, Responder};

use crate::models::requests::ItineraryRequest;
use crate::services::chat_client::ChatClient;
use crate::services::prompts;
use crate::services::sanitizer::sanitize_response;

/*
    POST /api/itineraries
*/
pub async fn plan(
    body: web::Json<ItineraryRequest>,
    client: web::Data<ChatClient>,
) -> impl Responder {
    let req = body.into_inner();
    if req.destination.trim().is_empty() || req.duration.trim().is_empty() {
        return HttpResponse::BadRequest().body("Destination and duration are required");
    }

    let prompt = prompts::itinerary_prompt(
        &req.destination,
        &req.duration,
        &req.mobility,
        &req.health_focus,
    );

    match client.complete(&prompt.system, &prompt.user, prompt.sampling).await {
        Ok(text) => {
            let cleaned = sanitize_response(&text);
            if cleaned.is_empty() {
                return HttpResponse::Ok()
                    .content_type("text/plain; charset=utf-8")
                    .body("Sorry, no itinerary could be generated right now. Please try again later.");
            }
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(cleaned)
        }
        Err(err) => {
            eprintln!("Failed to generate itinerary: {}", err);
            HttpResponse::BadGateway().body(format!("Failed to generate itinerary: {}", err))
        }
    }
}
