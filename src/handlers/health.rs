use crate::models::HealthResponse;
use actix_web::HttpResponse;

/// Health check endpoint
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        message: "crumbtrail is running".to_string(),
    })
}
