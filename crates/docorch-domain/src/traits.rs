//! Trait definitions for external interactions
//!
//! These traits define the boundaries between pipeline logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for language-model operations
///
/// Implemented by the infrastructure layer (docorch-llm). A provider takes a
/// single text prompt and returns the model's raw text answer; it makes no
/// promise that the answer is valid JSON.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Identifier of the targeted model
    fn model_name(&self) -> &str;
}
