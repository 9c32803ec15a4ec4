//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// LLM provider could not be set up
    #[error("LLM error: {0}")]
    Llm(#[from] docorch_llm::LlmError),

    /// Extraction aborted (model transport failure or bad settings)
    #[error("{0}")]
    Extractor(#[from] docorch_extractor::ExtractorError),

    /// Webhook client error (bad recipient, client setup)
    #[error("{0}")]
    Webhook(#[from] docorch_webhook::WebhookError),

    /// Every extraction attempt came back without JSON
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// The automation webhook did not deliver
    #[error("Webhook call failed: {0}")]
    WebhookFailed(String),
}
