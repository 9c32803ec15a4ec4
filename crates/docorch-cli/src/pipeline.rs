//! Wiring of ingest, extraction, sanitizing and delivery for one document.

use crate::config::{Config, ProviderKind};
use crate::error::Result;
use docorch_domain::traits::LlmProvider;
use docorch_domain::{DocumentBytes, DocumentFormat, ExtractionResult};
use docorch_extractor::StructuredExtractionClient;
use docorch_ingest::TextExtractor;
use docorch_llm::{GeminiProvider, LlmError, OllamaProvider};
use docorch_sanitizer::{sanitize_result, PostProcessor};
use docorch_webhook::{WebhookClient, WebhookOutcome, WebhookPayload};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// The model backend chosen by configuration.
pub enum ModelProvider {
    /// Google Gemini
    Gemini(GeminiProvider),
    /// Local Ollama
    Ollama(OllamaProvider),
    /// No usable backend; only valid together with stub mode
    Unconfigured,
}

impl LlmProvider for ModelProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> std::result::Result<String, Self::Error> {
        match self {
            ModelProvider::Gemini(provider) => provider.generate(prompt),
            ModelProvider::Ollama(provider) => provider.generate(prompt),
            ModelProvider::Unconfigured => Err(LlmError::Authentication(
                "no API key configured".to_string(),
            )),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            ModelProvider::Gemini(provider) => provider.model_name(),
            ModelProvider::Ollama(provider) => provider.model_name(),
            ModelProvider::Unconfigured => "none",
        }
    }
}

/// Read a document from disk, inferring the format from the extension
/// unless one is given.
pub fn read_document(path: &Path, format: Option<DocumentFormat>) -> Result<DocumentBytes> {
    let bytes = std::fs::read(path)?;
    let format = format.unwrap_or_else(|| DocumentFormat::from_path(path));
    debug!("Read {} bytes from {} as {}", bytes.len(), path.display(), format);
    Ok(DocumentBytes::new(bytes, format))
}

/// One configured pipeline.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a pipeline from configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract plain text from a document.
    pub fn extract_text(&self, document: DocumentBytes) -> String {
        TextExtractor::new(&self.config.ingest).extract(document)
    }

    /// Whether extraction will use the demonstration record.
    ///
    /// Stub mode is on when forced, when configured, or when Gemini is
    /// selected without an API key.
    pub fn uses_stub(&self, force_stub: bool) -> bool {
        force_stub || self.config.extractor.use_stub || self.config.missing_api_key()
    }

    /// Model backend for the current configuration.
    pub fn provider(&self) -> Result<ModelProvider> {
        let llm = &self.config.llm;
        let provider = match llm.provider {
            ProviderKind::Gemini => match llm.api_key.as_deref() {
                Some(key) if !key.trim().is_empty() => {
                    let mut provider = match llm.timeout() {
                        Some(timeout) => GeminiProvider::with_timeout(key, &llm.model, timeout)?,
                        None => GeminiProvider::new(key, &llm.model)?,
                    };
                    if let Some(endpoint) = &llm.endpoint {
                        provider = provider.with_endpoint(endpoint);
                    }
                    ModelProvider::Gemini(provider)
                }
                _ => ModelProvider::Unconfigured,
            },
            ProviderKind::Ollama => {
                let endpoint = llm
                    .endpoint
                    .as_deref()
                    .unwrap_or(docorch_llm::ollama::DEFAULT_ENDPOINT);
                ModelProvider::Ollama(OllamaProvider::new(endpoint, &llm.model)?)
            }
        };
        Ok(provider)
    }

    /// Run structured extraction and sanitize the result.
    pub fn extract(&self, text: &str, question: &str, force_stub: bool) -> Result<ExtractionResult> {
        let mut extractor_config = self.config.extractor.clone();
        extractor_config.use_stub = self.uses_stub(force_stub);
        if extractor_config.use_stub {
            info!("Running in stub mode; no model will be called");
        }

        let provider = if extractor_config.use_stub {
            ModelProvider::Unconfigured
        } else {
            self.provider()?
        };
        let client = StructuredExtractionClient::new(provider, extractor_config);
        let result = client.extract(text, question)?;

        let processor = PostProcessor::from_config(&self.config.sanitizer);
        Ok(sanitize_result(&processor, &result))
    }

    /// Post a sanitized result to the automation webhook.
    pub fn notify(
        &self,
        webhook_url: &str,
        text: &str,
        result: &ExtractionResult,
        question: &str,
        recipient: &str,
    ) -> Result<WebhookOutcome> {
        let client = WebhookClient::with_timeout(
            webhook_url,
            Duration::from_secs(self.config.webhook.timeout_secs),
        )?;
        let payload = WebhookPayload {
            document_text: text.to_string(),
            extracted_json: result.to_json(),
            question: question.to_string(),
            recipient_email: recipient.to_string(),
        };
        Ok(client.send(&payload))
    }
}
