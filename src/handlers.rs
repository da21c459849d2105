use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse, HealthResponse};
use axum::{
    extract::{Json, rejection::JsonRejection},
    response::Json as ResponseJson,
};
use tracing::{debug, info};

/// Health check handler
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(HealthResponse::ok()))
}

/// Chat handler
/// Accepts a JSON payload with any query string, blank included, and
/// answers with a placeholder that echoes it back
pub async fn chat_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<ResponseJson<ChatResponse>> {
    let Json(payload) = payload?;
    info!("Received query from frontend: {}", payload.query);

    Ok(ResponseJson(ChatResponse::echo(&payload.query)))
}
