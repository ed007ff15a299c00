//! HTTP request handlers for the chat endpoint

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::server::ServerState;

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub entries: usize,
}

/// Welcome handler
pub async fn index_handler() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to Chat Agent API" }))
}

/// Status handler
pub async fn status_handler(State(state): State<ServerState>) -> impl IntoResponse {
    let responder = state.responder.lock().await;

    let response = StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries: responder.store().len(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Chat handler: forwards the raw text to the responder and returns the
/// reply unmodified.
pub async fn chat_handler(
    State(state): State<ServerState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let mut responder = state.responder.lock().await;
    let response = responder.respond(&req.user_input);

    (StatusCode::OK, Json(ChatResponse { response })).into_response()
}
