use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness plus whether callers must bring their own API key
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let credential = if config.gemini_api_key.is_some() {
        "configured"
    } else {
        "per_request"
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "translation_model": config.gemini_model,
            "credential": credential,
        })),
    )
}
