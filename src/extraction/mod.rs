//! Laboratory report extraction engine
//!
//! Turns free-form report text into an [`ExtractionResult`]. The engine is a
//! pure synchronous function of its input: it performs no I/O and keeps no
//! state between calls. Compiled pattern tables are built once on first use
//! and shared read-only, so concurrent calls need no coordination.
//!
//! # Components
//!
//! - [`lines`] - line normalization and header classification
//! - [`patient`] / [`order`] - header field extraction
//! - [`lab_tests`] - tabular and differential row grammars
//! - [`fallback`] - named-test table for rows the grammars missed
//! - [`status`] - High/Low/Normal from inline markers
//! - [`report_type`] - keyword classification of the document
//! - [`keywords`] - diagnosis and medication spotting
//! - [`notes`] - clinical interpretation block
//! - [`engine`] - composes the above and merges test rows
//!
//! # Example
//!
//! ```
//! use labex::extraction::extract;
//!
//! let text = "PATIENT NAME : RAVI KUMAR\nLIVER FUNCTION TEST\nSGOT(AST) 45 IU/L 5-40";
//! let result = extract(text).unwrap();
//!
//! assert_eq!(result.patient.name.as_deref(), Some("RAVI KUMAR"));
//! assert_eq!(result.lab_tests.len(), 1);
//! ```
//!
//! [`ExtractionResult`]: crate::domain::ExtractionResult

pub mod engine;
pub mod fallback;
pub mod keywords;
pub mod lines;
pub mod notes;
pub mod order;
pub mod patient;
pub(crate) mod patterns;
pub mod report_type;
pub mod status;

pub use engine::{extract, merge_lab_tests};
pub use fallback::extract_specific_tests_comprehensive;
pub use keywords::{extract_diagnoses, extract_medications};
pub use lab_tests::extract_lab_tests_universal;
pub use notes::extract_clinical_interpretation;
pub use order::extract_order_info;
pub use patient::extract_patient_info;
pub use report_type::detect_report_type;
pub use status::determine_status;
