//! Flowgen Serve - HTTP API for the text-to-flowchart service.
//!
//! This crate exposes the conversion pipeline from `flowgen-core` over a
//! small REST API:
//!
//! - `POST /generate` - convert a text description into Mermaid markup
//! - `GET /examples` - fixed list of example descriptions for the UI
//! - `GET /health` - health probe, reports whether an API key is configured
//!
//! # Architecture
//!
//! - **AppState**: shared application state (the converter, configuration)
//! - **Routes**: endpoint handlers, one module per endpoint
//!
//! Request handling is one-shot and stateless; the only blocking operation is
//! the outbound model call, which the converter fully absorbs on failure.

mod error;
mod routes;
mod state;

pub use self::error::ApiError;
pub use self::routes::router;
pub use self::state::{AppState, Config};
