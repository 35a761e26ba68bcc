//! Error types for the conversion pipeline.

use thiserror::Error;

/// Errors from the text-generation collaborator.
///
/// Every variant is absorbed by the converter's fallback path; this type never
/// crosses the HTTP boundary as an error status.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Transport-level failure (connection, TLS, timeout imposed by the caller).
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, as returned (truncated by the client if oversized).
        message: String,
    },

    /// The API answered successfully but the response carried no usable text.
    #[error("model returned no text")]
    NoText,

    /// The model output did not parse or validate as Mermaid markup.
    #[error("generated content is not valid Mermaid flowchart or graph syntax")]
    InvalidMarkup,
}
