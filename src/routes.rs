use crate::api::BASE_PATH;
use crate::handlers::{chat_handler, health_check};
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new().nest(
        BASE_PATH,
        Router::new()
            .route("/health", get(health_check))
            .route("/chat", post(chat_handler)),
    )
}
