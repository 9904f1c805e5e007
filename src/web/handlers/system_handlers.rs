// src/web/handlers/system_handlers.rs
use crate::web::types::WelcomeResponse;

use rocket::serde::json::Json;
use tracing::info;

pub async fn index_handler() -> Json<WelcomeResponse> {
    info!("Root endpoint hit");
    Json(WelcomeResponse {
        message: "Welcome to the Job Search API".to_string(),
    })
}
