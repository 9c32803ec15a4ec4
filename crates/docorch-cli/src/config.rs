//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use docorch_extractor::ExtractorConfig;
use docorch_ingest::IngestConfig;
use docorch_sanitizer::SanitizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language-model settings
    pub llm: LlmSettings,

    /// Chunking, retry and throttle settings
    pub extractor: ExtractorConfig,

    /// Text extraction settings
    pub ingest: IngestConfig,

    /// Post-processing settings
    pub sanitizer: SanitizerConfig,

    /// Automation webhook settings
    pub webhook: WebhookSettings,

    /// Global settings
    pub settings: Settings,
}

/// Which model backend to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini (needs an API key)
    #[default]
    Gemini,
    /// Local Ollama server
    Ollama,
}

/// Language-model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Backend
    pub provider: ProviderKind,

    /// Model identifier
    pub model: String,

    /// API key (Gemini only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Per-request timeout (seconds); model calls wait indefinitely when unset
    pub timeout_secs: Option<u64>,
}

/// Automation webhook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSettings {
    /// Webhook URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Transport timeout (seconds)
    pub timeout_secs: u64,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enable colored output
    pub color: bool,

    /// Default output format
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl From<crate::cli::CliFormat> for OutputFormat {
    fn from(format: crate::cli::CliFormat) -> Self {
        match format {
            crate::cli::CliFormat::Table => OutputFormat::Table,
            crate::cli::CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: docorch_llm::gemini::DEFAULT_MODEL.to_string(),
            api_key: None,
            endpoint: None,
            timeout_secs: None,
        }
    }
}

impl LlmSettings {
    /// Model-call timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: docorch_webhook::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Json,
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".docorch").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply command-line and environment overrides.
    pub fn apply_overrides(&mut self, api_key: Option<String>, model: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.llm.model = model;
        }
    }

    /// True when Gemini is selected but no key is available.
    pub fn missing_api_key(&self) -> bool {
        self.llm.provider == ProviderKind::Gemini
            && self
                .llm
                .api_key
                .as_deref()
                .map_or(true, |key| key.trim().is_empty())
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        self.ingest.validate().map_err(CliError::Config)?;
        self.sanitizer.validate().map_err(CliError::Config)?;
        if self.llm.model.trim().is_empty() {
            return Err(CliError::Config("llm.model must not be empty".into()));
        }
        if self.llm.timeout_secs == Some(0) || self.webhook.timeout_secs == 0 {
            return Err(CliError::Config("timeouts must be greater than 0".into()));
        }
        Ok(())
    }
}
