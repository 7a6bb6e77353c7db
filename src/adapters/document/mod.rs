//! Document-to-text conversion
//!
//! The extraction engine consumes plain text only. Adapters in this module
//! turn a document on disk into that text, or fail with a [`DocumentError`].

pub mod plain_text;

pub use plain_text::PlainTextAdapter;

use crate::domain::DocumentError;
use std::fmt;
use std::path::Path;

/// Declared format of a source document, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
    Image,
    Unknown,
}

impl DocumentFormat {
    /// Classifies a path by its extension, ignoring case
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("txt") => Self::PlainText,
            Some("pdf") => Self::Pdf,
            Some("docx") => Self::Docx,
            Some("png" | "jpg" | "jpeg") => Self::Image,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Image => "image",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a document on disk into text
pub trait DocumentToText: Send + Sync {
    /// Returns the document's text
    ///
    /// # Errors
    ///
    /// - [`DocumentError::NotFound`] when the path does not exist
    /// - [`DocumentError::UnsupportedFormat`] when the adapter cannot read the format
    /// - [`DocumentError::ExtractionFailure`] when reading fails
    fn extract_text(&self, path: &Path) -> Result<String, DocumentError>;
}
