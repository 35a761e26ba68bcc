//! API route definitions.

mod examples;
mod generate;
mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
///
/// # Route Structure
///
/// - `POST /generate` - Convert a text description into Mermaid markup
/// - `GET /examples` - Example text descriptions for the UI
/// - `GET /health` - Health check
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate::generate_flowchart))
        .route("/examples", get(examples::get_examples))
        .route("/health", get(health::health_check))
        .with_state(state)
}
