//! OCR tier: rasterize pages, then recognise each image

use crate::error::IngestError;
use crate::pdf::PdfTextTier;
use crate::raster::{run_tool, Rasterizer};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Recognises the text in one page image
pub trait OcrEngine {
    /// Text found in `image`
    fn recognize(&self, image: &Path) -> Result<String, IngestError>;
}

/// The `tesseract` command-line engine
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: String,
    language: String,
}

impl TesseractEngine {
    /// Create an engine using `binary` and a tesseract language code
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &Path) -> Result<String, IngestError> {
        let mut command = Command::new(&self.binary);
        command
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language);
        run_tool(&mut command, &self.binary)
    }
}

/// Last PDF tier: rasterize with the first working rasterizer and OCR every page
///
/// Rasterizers are tried in order; a rasterizer counts as failed if rendering or
/// recognising any of its pages fails. Scratch images are deleted when the call
/// returns.
pub struct OcrTier {
    rasterizers: Vec<Box<dyn Rasterizer>>,
    engine: Box<dyn OcrEngine>,
}

impl OcrTier {
    /// Create a tier from ordered rasterizers and an engine
    pub fn new(rasterizers: Vec<Box<dyn Rasterizer>>, engine: Box<dyn OcrEngine>) -> Self {
        Self {
            rasterizers,
            engine,
        }
    }

    fn recognize_with(
        &self,
        rasterizer: &dyn Rasterizer,
        pdf: &Path,
        out_dir: &Path,
    ) -> Result<Vec<String>, IngestError> {
        fs::create_dir_all(out_dir)?;
        let images = rasterizer.rasterize(pdf, out_dir)?;
        debug!(rasterizer = rasterizer.name(), pages = images.len(), "Rasterized PDF");

        let mut pages = Vec::with_capacity(images.len());
        for image in &images {
            let text = self.engine.recognize(image)?;
            if !text.trim().is_empty() {
                pages.push(text);
            }
        }
        Ok(pages)
    }
}

impl PdfTextTier for OcrTier {
    fn name(&self) -> &'static str {
        "ocr"
    }

    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, IngestError> {
        let scratch = tempfile::tempdir()?;
        let pdf_path = scratch.path().join("document.pdf");
        fs::write(&pdf_path, pdf)?;

        let mut last_error = None;
        for (idx, rasterizer) in self.rasterizers.iter().enumerate() {
            let out_dir = scratch.path().join(format!("r{}", idx));
            match self.recognize_with(rasterizer.as_ref(), &pdf_path, &out_dir) {
                Ok(pages) => return Ok(pages),
                Err(e) => {
                    warn!(rasterizer = rasterizer.name(), error = %e, "OCR path failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| IngestError::NoPages("ocr".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// Writes `pages` empty PNG files, or fails
    struct FakeRasterizer {
        pages: Option<usize>,
        calls: Arc<Mutex<usize>>,
    }

    impl Rasterizer for FakeRasterizer {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn rasterize(&self, _pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
            *self.calls.lock().unwrap() += 1;
            let pages = self.pages.ok_or_else(|| IngestError::Tool {
                tool: "fake".to_string(),
                message: "cannot render".to_string(),
            })?;
            (1..=pages)
                .map(|n| -> Result<PathBuf, IngestError> {
                    let path = out_dir.join(format!("page-{}.png", n));
                    fs::write(&path, b"")?;
                    Ok(path)
                })
                .collect()
        }
    }

    /// Returns the image file name as its "text"; blank for page 2
    struct EchoEngine;

    impl OcrEngine for EchoEngine {
        fn recognize(&self, image: &Path) -> Result<String, IngestError> {
            let name = image.file_stem().unwrap().to_string_lossy().into_owned();
            Ok(if name == "page-2" { "  \n".to_string() } else { name })
        }
    }

    fn rasterizer(pages: Option<usize>) -> (Box<dyn Rasterizer>, Arc<Mutex<usize>>) {
        let calls = Arc::new(Mutex::new(0));
        (
            Box::new(FakeRasterizer {
                pages,
                calls: Arc::clone(&calls),
            }),
            calls,
        )
    }

    #[test]
    fn test_primary_rasterizer_used_and_blank_pages_dropped() {
        let (primary, primary_calls) = rasterizer(Some(3));
        let (fallback, fallback_calls) = rasterizer(Some(1));
        let tier = OcrTier::new(vec![primary, fallback], Box::new(EchoEngine));

        let pages = tier.extract_pages(b"%PDF-1.4").unwrap();
        assert_eq!(pages, vec!["page-1", "page-3"]);
        assert_eq!(*primary_calls.lock().unwrap(), 1);
        assert_eq!(*fallback_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_falls_back_to_second_rasterizer() {
        let (primary, _) = rasterizer(None);
        let (fallback, fallback_calls) = rasterizer(Some(1));
        let tier = OcrTier::new(vec![primary, fallback], Box::new(EchoEngine));

        let pages = tier.extract_pages(b"%PDF-1.4").unwrap();
        assert_eq!(pages, vec!["page-1"]);
        assert_eq!(*fallback_calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_all_rasterizers_fail() {
        let (primary, _) = rasterizer(None);
        let (fallback, _) = rasterizer(None);
        let tier = OcrTier::new(vec![primary, fallback], Box::new(EchoEngine));

        assert!(matches!(
            tier.extract_pages(b"%PDF-1.4"),
            Err(IngestError::Tool { .. })
        ));
    }
}
