//! The conversion pipeline: prompt, generate, extract, validate, fall back.

use std::sync::Arc;

use crate::error::GenerateError;
use crate::extract::{extract_markup, is_valid_markup};
use crate::fallback::fallback_markup;
use crate::generate::TextGenerator;
use crate::prompt::build_prompt;

/// Outcome of a conversion.
///
/// `markup` always starts with `flowchart` or `graph`, even when `succeeded`
/// is false: the fallback path substitutes a complete fixed diagram.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// The Mermaid markup (generated or fallback).
    pub markup: String,
    /// Whether the markup came from the model rather than the fallback.
    pub succeeded: bool,
    /// The failure reason when `succeeded` is false.
    pub error_detail: Option<String>,
}

/// Converts free-form text descriptions into Mermaid flowchart markup.
///
/// Stateless per invocation; concurrent calls share only the read-only
/// generator handle.
#[derive(Clone)]
pub struct Converter {
    generator: Arc<dyn TextGenerator>,
}

impl Converter {
    /// Create a converter backed by the given text-generation collaborator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Convert a text description into Mermaid markup.
    ///
    /// `text` is assumed non-empty; the HTTP boundary enforces that before
    /// calling in. Never fails: any generation or validation error lands in
    /// the fallback diagram with the reason as a `%%` comment.
    pub async fn convert(&self, text: &str) -> ConversionResult {
        let prompt = build_prompt(text);

        match self.generate_markup(&prompt).await {
            Ok(markup) => ConversionResult {
                markup,
                succeeded: true,
                error_detail: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "conversion failed, returning fallback diagram");
                let detail = err.to_string();
                ConversionResult {
                    markup: fallback_markup(&detail),
                    succeeded: false,
                    error_detail: Some(detail),
                }
            }
        }
    }

    async fn generate_markup(&self, prompt: &str) -> Result<String, GenerateError> {
        let raw = self.generator.generate(prompt).await?;
        let candidate = extract_markup(&raw);

        if !is_valid_markup(&candidate) {
            return Err(GenerateError::InvalidMarkup);
        }

        Ok(candidate)
    }
}
