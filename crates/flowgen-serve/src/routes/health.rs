//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    api_configured: bool,
}

/// `GET /health`
///
/// Returns service health without touching the model API. `api_configured`
/// reports whether a non-empty API key is present.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "flowgen",
        api_configured: state.config.api_configured(),
    })
}
