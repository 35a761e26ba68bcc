//! Core conversion pipeline for the flowgen service.
//!
//! This crate turns a free-form text description into Mermaid.js flowchart
//! syntax by prompting a generative text model and post-processing its raw
//! output:
//! - Prompt construction from a fixed instruction template
//! - Fenced-code-block extraction and prefix validation of the model output
//! - A fixed fallback diagram returned whenever generation or validation fails
//!
//! The pipeline is infallible from the caller's perspective: [`Converter::convert`]
//! always returns syntactically prefixed Mermaid markup, even when the model
//! call fails outright.

mod convert;
mod error;
mod extract;
mod fallback;
mod generate;
mod prompt;

pub use convert::{ConversionResult, Converter};
pub use error::GenerateError;
pub use extract::{extract_markup, is_valid_markup};
pub use fallback::fallback_markup;
pub use generate::{GeminiClient, TextGenerator};
pub use prompt::build_prompt;
