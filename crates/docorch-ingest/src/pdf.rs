//! Text-layer tiers of the PDF fallback chain

use crate::error::IngestError;
use tracing::debug;

/// One strategy in the PDF fallback chain
///
/// Returns the text of each page in page order. Pages without text may be empty.
pub trait PdfTextTier {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Extract per-page text from an in-memory PDF
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, IngestError>;
}

/// Join page texts with a blank line, skipping pages that produced nothing
pub fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Native text layer read page by page with `lopdf`
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfTier;

impl PdfTextTier for LopdfTier {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, IngestError> {
        let document =
            lopdf::Document::load_mem(pdf).map_err(|e| IngestError::Pdf(e.to_string()))?;

        let pages = document.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for page_number in pages.keys() {
            match document.extract_text(&[*page_number]) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    debug!(page = page_number, error = %e, "No text layer on page");
                    texts.push(String::new());
                }
            }
        }

        Ok(texts)
    }
}

/// Independent parser (`pdf-extract`); pages are separated by form feeds
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractTier;

impl PdfTextTier for PdfExtractTier {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, IngestError> {
        let text = pdf_extract::extract_text_from_mem(pdf)
            .map_err(|e| IngestError::Pdf(e.to_string()))?;

        Ok(text.split('\x0C').map(str::to_string).collect())
    }
}
