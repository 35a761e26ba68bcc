//! API error types and response formatting.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API error type that converts to appropriate HTTP responses.
///
/// Conversion failures never appear here: the converter's fallback guarantee
/// means `/generate` answers 200 even when the model call fails. Only
/// boundary-level problems (bad request shape) and genuinely unexpected
/// handler errors become HTTP error statuses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request (missing/empty text, malformed body).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unexpected internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": format!("Failed to generate flowchart: {err}"),
                    })),
                )
                    .into_response()
            }
        }
    }
}
