//! Error types for text ingestion
//!
//! These never leave [`crate::TextExtractor::extract`]; they are logged and the
//! next tier is tried.

use thiserror::Error;

/// Errors raised inside a single extraction tier
#[derive(Error, Debug)]
pub enum IngestError {
    /// PDF could not be parsed
    #[error("PDF parse error: {0}")]
    Pdf(String),

    /// External tool failed or is missing
    #[error("{tool} failed: {message}")]
    Tool {
        /// Program name
        tool: String,
        /// stderr or spawn error
        message: String,
    },

    /// Rasterizer produced no page images
    #[error("{0} produced no page images")]
    NoPages(String),

    /// Third-party parser panicked
    #[error("{0} panicked")]
    Panicked(String),

    /// Filesystem error on scratch files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
