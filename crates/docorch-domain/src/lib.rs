//! Docorch Domain Layer
//!
//! Value types and trait seams shared by every stage of the
//! document-to-structured-data pipeline.
//!
//! ## Key Concepts
//!
//! - **DocumentBytes**: raw upload plus its declared format (`pdf` or `text`)
//! - **ScalarValue**: the string / integer / float value of one extracted field
//! - **StructuredRecord**: one model answer (`summary`, `key_fields`, `confidence`, `risk_level`)
//! - **ExtractionResult**: the best candidate of an extraction run, or its terminal error
//!
//! ## Architecture
//!
//! ```text
//! DocumentBytes → text → chunks → LlmProvider → StructuredRecord → ExtractionResult
//! ```
//!
//! Infrastructure (PDF parsing, HTTP, OCR) lives in other crates and plugs in
//! through the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod record;
pub mod result;
pub mod scalar;
pub mod traits;

// Re-exports for convenience
pub use document::{DocumentBytes, DocumentFormat};
pub use record::{SchemaIssue, StructuredRecord};
pub use result::{ExtractionOutcome, ExtractionResult};
pub use scalar::{KeyFields, ScalarValue};
