//! Configuration for the Sanitizer

use crate::redact::DEFAULT_SENSITIVE_FRAGMENTS;
use serde::{Deserialize, Serialize};

/// Which transforms run, and what counts as sensitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Field-name fragments that mark a field as sensitive (case-insensitive)
    pub sensitive_fragments: Vec<String>,

    /// Mask sensitive fields
    pub redact: bool,

    /// Convert numeric strings into numbers
    pub normalize_numbers: bool,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            sensitive_fragments: DEFAULT_SENSITIVE_FRAGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            redact: true,
            normalize_numbers: true,
        }
    }
}

impl SanitizerConfig {
    /// Pass-through preset: nothing is changed
    pub fn passthrough() -> Self {
        Self {
            redact: false,
            normalize_numbers: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.redact && self.sensitive_fragments.iter().any(|f| f.trim().is_empty()) {
            // An empty fragment matches every field name.
            return Err("sensitive_fragments must not contain empty entries".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}
