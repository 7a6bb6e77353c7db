//! Domain models and types for Labex.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Report model** ([`ExtractionResult`], [`PatientInfo`], [`OrderInfo`], [`LabTest`])
//! - **Classifications** ([`TestStatus`], [`ReportType`])
//! - **Error types** ([`LabexError`], [`ExtractionError`], [`DocumentError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, LabexError>`]:
//!
//! ```rust
//! use labex::domain::{LabexError, Result};
//!
//! fn example() -> Result<()> {
//!     let result = labex::extraction::extract("GLUCOSE 95 mg/dl 70-110")?;
//!     assert_eq!(result.lab_tests.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod report;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DocumentError, ExtractionError, LabexError, StoreError};
pub use report::{
    Diagnosis, ExtractionMetadata, ExtractionResult, LabTest, Medication, OrderInfo,
    PatientInfo, ReportType, TestStatus,
};
pub use result::Result;
