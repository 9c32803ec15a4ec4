//! Error types for the Extractor

use thiserror::Error;

/// Errors that abort an extraction
///
/// Unparseable model output is not an error: it ends in an
/// `ExtractionResult` carrying the failure and the raw outputs.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error (transport or API failure)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
