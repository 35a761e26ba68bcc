//! Flowchart generation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// The text description to convert. Optional so that a missing field
    /// produces our 400 response rather than a deserialization rejection.
    pub text: Option<String>,
}

/// Response body for a successful generation.
///
/// `success` is true even when the converter fell back to the fixed diagram;
/// the fallback carries its error as a `%%` comment inside the markup.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub mermaid_code: String,
    pub original_text: String,
}

/// `POST /generate`
///
/// Converts a text description into Mermaid flowchart markup. The text must
/// be non-empty after trimming; validation happens here, before the converter
/// is invoked.
pub async fn generate_flowchart(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected malformed request body");
        ApiError::BadRequest("Text description is required".to_string())
    })?;

    let Some(text) = request.text.as_deref() else {
        return Err(ApiError::BadRequest(
            "Text description is required".to_string(),
        ));
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest(
            "Text description cannot be empty".to_string(),
        ));
    }

    let result = state.converter.convert(text).await;

    Ok(Json(GenerateResponse {
        success: true,
        mermaid_code: result.markup,
        original_text: text.to_string(),
    }))
}
