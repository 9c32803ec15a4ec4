//! Docorch LLM Provider Layer
//!
//! Pluggable language-model collaborators behind the `LlmProvider` trait from
//! `docorch-domain`. A provider takes one prompt and returns the model's raw
//! text; it never interprets the answer.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic scripted responses for testing
//! - `GeminiProvider`: Google Gemini `generateContent` API
//! - `OllamaProvider`: Local Ollama API
//!
//! # Examples
//!
//! ```
//! use docorch_llm::MockProvider;
//! use docorch_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod ollama;

use docorch_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Credential rejected by the provider
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Map a non-success HTTP status to an `LlmError`
pub(crate) fn status_error(status: reqwest::StatusCode, model: &str, body: String) -> LlmError {
    match status.as_u16() {
        401 | 403 => LlmError::Authentication(format!("HTTP {}", status)),
        404 => LlmError::ModelNotAvailable(model.to_string()),
        429 => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}

/// Scripted reply of the mock
#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail(String),
}

/// Mock LLM provider for deterministic testing
///
/// Resolution order for each call: the FIFO queue (see [`MockProvider::push_response`]),
/// then per-prompt responses, then the default response. Every prompt is recorded.
///
/// # Examples
///
/// ```
/// use docorch_llm::MockProvider;
/// use docorch_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Sequential responses
/// let provider = MockProvider::default();
/// provider.push_response("first");
/// provider.push_response("second");
/// assert_eq!(provider.generate("a").unwrap(), "first");
/// assert_eq!(provider.generate("b").unwrap(), "second");
/// assert_eq!(provider.generate("c").unwrap(), "Default mock response");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    model: String,
    responses: Arc<Mutex<HashMap<String, Scripted>>>,
    queue: Arc<Mutex<VecDeque<Scripted>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            model: "mock".to_string(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the reported model name
    pub fn with_model_name(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        locked(&self.responses).insert(prompt.into(), Scripted::Reply(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        locked(&self.responses).insert(prompt.into(), Scripted::Fail("Mock error".to_string()));
    }

    /// Queue a response for the next unanswered call
    pub fn push_response(&self, response: impl Into<String>) {
        locked(&self.queue).push_back(Scripted::Reply(response.into()));
    }

    /// Queue a transport failure for the next unanswered call
    pub fn push_error(&self, message: impl Into<String>) {
        locked(&self.queue).push_back(Scripted::Fail(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        locked(&self.prompts).len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        locked(&self.prompts).clone()
    }

    /// Reset the call count and recorded prompts
    pub fn reset_call_count(&self) {
        locked(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        locked(&self.prompts).push(prompt.to_string());

        let scripted = locked(&self.queue)
            .pop_front()
            .or_else(|| locked(&self.responses).get(prompt).cloned());

        match scripted {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
