//! Application state and configuration.

use std::sync::Arc;

use flowgen_core::{Converter, GeminiClient, TextGenerator};

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Gemini API key (loaded from GEMINI_API_KEY).
    pub gemini_api_key: String,

    /// Gemini model identifier.
    pub gemini_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEMINI_API_KEY`: API key for the Gemini text-generation API
    ///
    /// Optional environment variables:
    /// - `FLOWGEN_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `FLOWGEN_GEMINI_MODEL`: Model name (default: "gemini-1.5-flash")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("FLOWGEN_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable is required"))?;

        if gemini_api_key.trim().is_empty() {
            anyhow::bail!("GEMINI_API_KEY must not be empty");
        }

        let gemini_model = std::env::var("FLOWGEN_GEMINI_MODEL")
            .unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            model = %gemini_model,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            gemini_api_key,
            gemini_model,
        })
    }

    /// Whether a usable API credential is present.
    pub fn api_configured(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }
}

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The text-to-Mermaid converter.
    pub converter: Converter,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state with a Gemini-backed converter.
    pub fn new(config: Config) -> Self {
        let generator =
            GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
        Self::with_generator(config, Arc::new(generator))
    }

    /// Create application state with an explicit generator.
    ///
    /// Tests use this to inject a canned collaborator instead of the live
    /// Gemini client.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            converter: Converter::new(generator),
            config: Arc::new(config),
        }
    }
}
