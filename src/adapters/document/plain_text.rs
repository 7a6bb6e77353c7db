//! Plain-text document adapter

use super::{DocumentFormat, DocumentToText};
use crate::domain::DocumentError;
use std::path::Path;

/// Reads `.txt` documents
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; OCR
/// output frequently carries stray bytes. Every other format is unsupported.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextAdapter;

impl PlainTextAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentToText for PlainTextAdapter {
    fn extract_text(&self, path: &Path) -> Result<String, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::NotFound(path.to_path_buf()));
        }

        let format = DocumentFormat::from_path(path);
        if format != DocumentFormat::PlainText {
            return Err(DocumentError::UnsupportedFormat(format!(
                "{} ({})",
                format,
                path.display()
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            DocumentError::ExtractionFailure(format!("{}: {}", path.display(), e))
        })?;

        let text = String::from_utf8_lossy(&bytes).into_owned();

        tracing::debug!(
            path = %path.display(),
            characters = text.chars().count(),
            "Document text read"
        );

        Ok(text)
    }
}
