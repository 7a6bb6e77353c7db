//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console logs on stderr, keeping stdout free for JSON output
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use labex::logging::init_logging;
//! use labex::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the completion of one extraction
///
/// # Example
///
/// ```no_run
/// use labex::log_extraction_complete;
/// use std::time::Instant;
///
/// let started = Instant::now();
/// let result = labex::extraction::extract("GLUCOSE 95 mg/dl 70-110").unwrap();
/// log_extraction_complete!(&result, started.elapsed());
/// ```
#[macro_export]
macro_rules! log_extraction_complete {
    ($result:expr, $duration:expr) => {
        tracing::info!(
            report_type = %$result.report_type,
            lab_tests = $result.lab_tests.len(),
            abnormal = $result.abnormal_count(),
            diagnoses = $result.diagnoses.len(),
            medications = $result.medications.len(),
            duration_ms = $duration.as_millis(),
            "Extraction completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use labex::log_error_with_context;
/// use labex::domain::LabexError;
///
/// let error = LabexError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log rows appended to the record store
///
/// # Example
///
/// ```no_run
/// use labex::log_rows_appended;
///
/// log_rows_appended!(12, "lab_results.jsonl", false);
/// ```
#[macro_export]
macro_rules! log_rows_appended {
    ($rows:expr, $path:expr, $dry_run:expr) => {
        tracing::info!(
            rows = $rows,
            path = %$path,
            dry_run = $dry_run,
            "Rows appended to record store"
        );
    };
}
