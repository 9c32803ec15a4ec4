//! Document-to-text entry point

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::ocr::{OcrTier, TesseractEngine};
use crate::pdf::{join_pages, LopdfTier, PdfExtractTier, PdfTextTier};
use crate::raster::{MutoolRasterizer, PdftoppmRasterizer, Rasterizer};
use crate::text::decode_text;
use docorch_domain::{DocumentBytes, DocumentFormat};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// Converts uploaded documents into plain text
pub struct TextExtractor {
    pdf_tiers: Vec<Box<dyn PdfTextTier>>,
}

impl TextExtractor {
    /// Standard chain: lopdf, pdf-extract, then OCR when enabled
    pub fn new(config: &IngestConfig) -> Self {
        let mut tiers: Vec<Box<dyn PdfTextTier>> =
            vec![Box::new(LopdfTier), Box::new(PdfExtractTier)];

        if config.ocr_enabled {
            let rasterizers: Vec<Box<dyn Rasterizer>> = vec![
                Box::new(PdftoppmRasterizer::new(&config.pdftoppm_bin, config.ocr_dpi)),
                Box::new(MutoolRasterizer::new(&config.mutool_bin, config.fallback_dpi)),
            ];
            let engine = TesseractEngine::new(&config.tesseract_bin, &config.ocr_language);
            tiers.push(Box::new(OcrTier::new(rasterizers, Box::new(engine))));
        }

        Self::with_tiers(tiers)
    }

    /// Chain made of the given tiers, tried in order
    pub fn with_tiers(pdf_tiers: Vec<Box<dyn PdfTextTier>>) -> Self {
        Self { pdf_tiers }
    }

    /// Names of the PDF tiers in the order they are tried
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.pdf_tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Extract plain text; empty when nothing could be read
    pub fn extract(&self, document: DocumentBytes) -> String {
        match document.format() {
            DocumentFormat::Pdf => self.extract_pdf(document.as_bytes()),
            DocumentFormat::Text => decode_text(document.as_bytes()),
        }
    }

    /// Run the PDF chain until a tier yields non-blank text
    pub fn extract_pdf(&self, pdf: &[u8]) -> String {
        for tier in &self.pdf_tiers {
            match run_tier(tier.as_ref(), pdf) {
                Ok(pages) => {
                    let text = join_pages(&pages);
                    if !text.trim().is_empty() {
                        info!(
                            tier = tier.name(),
                            pages = pages.len(),
                            chars = text.chars().count(),
                            "Extracted PDF text"
                        );
                        return text;
                    }
                    debug!(tier = tier.name(), "Tier produced no text");
                }
                Err(e) => warn!(tier = tier.name(), error = %e, "Tier failed"),
            }
        }

        warn!("No tier could extract text from PDF");
        String::new()
    }
}

/// Run one tier, turning a panic inside a third-party parser into an error
fn run_tier(tier: &dyn PdfTextTier, pdf: &[u8]) -> Result<Vec<String>, IngestError> {
    panic::catch_unwind(AssertUnwindSafe(|| tier.extract_pages(pdf)))
        .unwrap_or_else(|_| Err(IngestError::Panicked(tier.name().to_string())))
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}
