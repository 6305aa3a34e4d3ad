use actix_web::{web, HttpResponse, Responder};

use crate::models::requests::RecommendationRequest;
use crate::services::chat_client::ChatClient;
use crate::services::prompts;
use crate::services::sanitizer::sanitize_response;

/*
    POST /api/recommendations
*/
pub async fn recommend(
    body: web::Json<RecommendationRequest>,
    client: web::Data<ChatClient>,
) -> impl Responder {
    let req = body.into_inner();
    if req.season.trim().is_empty()
        || req.health_condition.trim().is_empty()
        || req.budget.trim().is_empty()
        || req.interests.is_empty()
    {
        return HttpResponse::BadRequest()
            .body("Season, health condition, budget and at least one interest are required");
    }

    let prompt =
        prompts::recommendation_prompt(&req.season, &req.health_condition, &req.budget, &req.interests);

    match client.complete(&prompt.system, &prompt.user, prompt.sampling).await {
        Ok(text) => {
            let cleaned = sanitize_response(&text);
            if cleaned.is_empty() {
                return HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(
                    "Sorry, no recommendation could be generated right now. Please try again later.",
                );
            }
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(cleaned)
        }
        Err(err) => {
            eprintln!("Failed to generate recommendation: {}", err);
            HttpResponse::BadGateway().body(format!("Failed to generate recommendation: {}", err))
        }
    }
}
