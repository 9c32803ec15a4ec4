//! Configuration for text ingestion

use serde::{Deserialize, Serialize};

/// Settings for the PDF fallback chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Run the OCR tier when both text-layer tiers come up empty
    pub ocr_enabled: bool,

    /// Resolution of the primary rasterizer (pdftoppm)
    pub ocr_dpi: u32,

    /// Resolution of the fallback rasterizer (mutool)
    pub fallback_dpi: u32,

    /// Tesseract language code
    pub ocr_language: String,

    /// Path or name of the tesseract binary
    pub tesseract_bin: String,

    /// Path or name of the pdftoppm binary (Poppler)
    pub pdftoppm_bin: String,

    /// Path or name of the mutool binary (MuPDF)
    pub mutool_bin: String,
}

/// Lowest resolution that still gives usable OCR
pub const MIN_OCR_DPI: u32 = 200;

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            ocr_enabled: true,
            ocr_dpi: 300,
            fallback_dpi: 200,
            ocr_language: "eng".to_string(),
            tesseract_bin: "tesseract".to_string(),
            pdftoppm_bin: "pdftoppm".to_string(),
            mutool_bin: "mutool".to_string(),
        }
    }
}

impl IngestConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ocr_dpi < MIN_OCR_DPI || self.fallback_dpi < MIN_OCR_DPI {
            return Err(format!("OCR resolution must be at least {} DPI", MIN_OCR_DPI));
        }
        if self.ocr_language.trim().is_empty() {
            return Err("ocr_language must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IngestConfig::default().validate().is_ok());
    }

    #[test]
    fn test_low_dpi_rejected() {
        let config = IngestConfig {
            fallback_dpi: 150,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = IngestConfig::from_toml("ocr_enabled = false\ntesseract_bin = \"/opt/tess\"").unwrap();
        assert!(!config.ocr_enabled);
        assert_eq!(config.tesseract_bin, "/opt/tess");
        assert_eq!(config.ocr_dpi, 300);
    }
}
