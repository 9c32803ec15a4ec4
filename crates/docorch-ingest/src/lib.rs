//! Docorch Ingest
//!
//! Turns uploaded document bytes into plain text.
//!
//! # Architecture
//!
//! ```text
//! pdf:  lopdf text layer → pdf-extract → OCR (pdftoppm | mutool → tesseract)
//! text: UTF-8 → Latin-1 → UTF-16 → lossy UTF-8
//! ```
//!
//! Each PDF tier is tried in order until one yields non-blank text. A tier that
//! errors or panics counts as "no text"; when every tier comes up empty the
//! result is an empty string. Extraction never fails.
//!
//! # Example Usage
//!
//! ```no_run
//! use docorch_domain::{DocumentBytes, DocumentFormat};
//! use docorch_ingest::{IngestConfig, TextExtractor};
//!
//! let extractor = TextExtractor::new(&IngestConfig::default());
//! let bytes = std::fs::read("statement.pdf").unwrap();
//! let text = extractor.extract(DocumentBytes::new(bytes, DocumentFormat::Pdf));
//! println!("{} chars", text.chars().count());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod ocr;
mod pdf;
mod raster;
mod text;

pub use config::IngestConfig;
pub use error::IngestError;
pub use extractor::TextExtractor;
pub use ocr::{OcrEngine, OcrTier, TesseractEngine};
pub use pdf::{join_pages, LopdfTier, PdfExtractTier, PdfTextTier};
pub use raster::{MutoolRasterizer, PdftoppmRasterizer, Rasterizer};
pub use text::{decode_text, TextEncoding, DECODE_ORDER};
