//! Domain error types
//!
//! This module defines the error hierarchy for Labex. Every fallible
//! operation surfaces one of these types; third-party error types are
//! converted at the boundary and never leak through the public API.
//!
//! "Field not found" is deliberately absent from the taxonomy: a report that
//! lacks a patient name or a reference range produces an empty field, not an
//! error.

use std::path::PathBuf;
use thiserror::Error;

/// Main Labex error type
#[derive(Debug, Error)]
pub enum LabexError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Extraction engine errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Document-to-text adapter errors
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Record store errors
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the extraction engine
///
/// These are the only outcomes that prevent a structured result from being
/// produced. A report in which nothing was recognised is still a successful
/// extraction with empty sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The input text was empty or contained only whitespace
    #[error("Input text is empty")]
    EmptyInput,

    /// The input text is shorter than the configured minimum
    #[error("Insufficient text extracted from document: {length} characters (minimum {minimum})")]
    InsufficientText { length: usize, minimum: usize },
}

/// Errors raised by a document-to-text adapter
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document format cannot be converted to text by this adapter
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document exists but its text could not be recovered
    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    /// The document does not exist
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Errors raised by a record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rows could not be appended
    #[error("Failed to write records: {0}")]
    WriteFailed(String),

    /// The store could not be read
    #[error("Failed to read records: {0}")]
    ReadFailed(String),

    /// A stored row could not be decoded
    #[error("Corrupt record at line {line}: {message}")]
    CorruptRecord { line: usize, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for LabexError {
    fn from(err: std::io::Error) -> Self {
        LabexError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LabexError {
    fn from(err: serde_json::Error) -> Self {
        LabexError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LabexError {
    fn from(err: toml::de::Error) -> Self {
        LabexError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl LabexError {
    /// Process exit code for this error when it reaches the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            LabexError::Configuration(_) => 2,
            LabexError::Document(_) | LabexError::Extraction(_) => 3,
            _ => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labex_error_display() {
        let err = LabexError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_extraction_error_conversion() {
        let labex_err: LabexError = ExtractionError::EmptyInput.into();
        assert!(matches!(
            labex_err,
            LabexError::Extraction(ExtractionError::EmptyInput)
        ));
        assert_eq!(labex_err.exit_code(), 3);
    }

    #[test]
    fn test_insufficient_text_message() {
        let err = ExtractionError::InsufficientText {
            length: 12,
            minimum: 50,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient text extracted from document: 12 characters (minimum 50)"
        );
    }

    #[test]
    fn test_document_error_conversion() {
        let doc_err = DocumentError::UnsupportedFormat("pdf".to_string());
        let labex_err: LabexError = doc_err.into();
        assert!(matches!(labex_err, LabexError::Document(_)));
        assert!(labex_err.to_string().contains("Unsupported document format"));
    }

    #[test]
    fn test_not_found_displays_path() {
        let err = DocumentError::NotFound(PathBuf::from("/tmp/missing.txt"));
        assert_eq!(err.to_string(), "Document not found: /tmp/missing.txt");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::CorruptRecord {
            line: 3,
            message: "expected value".to_string(),
        };
        let labex_err: LabexError = store_err.into();
        assert!(matches!(labex_err, LabexError::Store(_)));
        assert_eq!(labex_err.exit_code(), 5);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let labex_err: LabexError = io_err.into();
        assert!(matches!(labex_err, LabexError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let labex_err: LabexError = json_err.into();
        assert!(matches!(labex_err, LabexError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let labex_err: LabexError = toml_err.into();
        assert!(matches!(labex_err, LabexError::Configuration(_)));
        assert!(labex_err.to_string().contains("TOML parse error"));
        assert_eq!(labex_err.exit_code(), 2);
    }

    #[test]
    fn test_labex_error_implements_std_error() {
        let err = LabexError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
