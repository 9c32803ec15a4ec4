//! Uploaded documents and their declared format

use std::fmt;
use std::path::Path;

/// Declared format of an uploaded document
///
/// Only two formats are accepted; anything that is not a PDF is read as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,

    /// Plain text in an unknown encoding
    Text,
}

impl DocumentFormat {
    /// Get the format tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Text => "text",
        }
    }

    /// Parse a format tag (`pdf`, `text` or `txt`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "text" | "txt" => Some(DocumentFormat::Text),
            _ => None,
        }
    }

    /// Infer the format from a file name
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_pdf = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf {
            DocumentFormat::Pdf
        } else {
            DocumentFormat::Text
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw bytes of one uploaded document
///
/// Created once per upload and consumed by the text extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBytes {
    bytes: Vec<u8>,
    format: DocumentFormat,
}

impl DocumentBytes {
    /// Wrap raw bytes with their declared format
    pub fn new(bytes: impl Into<Vec<u8>>, format: DocumentFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }

    /// Declared format
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the upload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take ownership of the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
