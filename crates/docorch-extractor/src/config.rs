//! Configuration for the Extractor

use crate::aggregation::AggregationStrategy;
use crate::chunking::DEFAULT_MAX_CHUNK_CHARS;
use crate::throttle::ThrottlePolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum chunk size (characters)
    pub max_chunk_chars: usize,

    /// Attempts over the whole document before giving up
    pub max_attempts: u32,

    /// Pause after every model call (milliseconds)
    pub inter_call_delay_ms: u64,

    /// Pause before a retry attempt (milliseconds)
    pub retry_delay_ms: u64,

    /// How per-chunk candidates combine into one record
    pub aggregation: AggregationStrategy,

    /// Return the demonstration record instead of calling the model
    pub use_stub: bool,
}

impl ExtractorConfig {
    /// Throttle policy built from the configured delays
    pub fn throttle(&self) -> ThrottlePolicy {
        ThrottlePolicy {
            inter_call_delay: Duration::from_millis(self.inter_call_delay_ms),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_chars == 0 {
            return Err("max_chunk_chars must be greater than 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            max_attempts: 2,
            inter_call_delay_ms: 150,
            retry_delay_ms: 200,
            aggregation: AggregationStrategy::LastValidWins,
            use_stub: false,
        }
    }
}

impl ExtractorConfig {
    /// Offline preset: never calls a model
    pub fn offline() -> Self {
        Self {
            use_stub: true,
            ..Self::default()
        }
    }

    /// Thorough preset: smaller chunks, an extra attempt, every chunk merged
    pub fn thorough() -> Self {
        Self {
            max_chunk_chars: 4_000,
            max_attempts: 3,
            inter_call_delay_ms: 250,
            retry_delay_ms: 500,
            aggregation: AggregationStrategy::MergeAllChunks,
            use_stub: false,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
