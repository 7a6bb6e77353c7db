// Labex - Laboratory Report Extraction Tool
// Copyright (c) 2025 Labex Contributors
// Licensed under the MIT License

//! # Labex - Laboratory Report Extraction
//!
//! Labex turns the text of a clinical laboratory report into a structured
//! record: patient demographics, order metadata, individual test results with
//! abnormality flags, diagnoses, medications and clinical notes.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Reading** report documents into plain text
//! - **Extracting** structured results with line grammars and a fallback table
//! - **Storing** one row per lab test in an append-only record store
//!
//! ## Architecture
//!
//! Labex follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Analysis pipeline
//! - [`extraction`] - Pure text-to-result extraction engine
//! - [`adapters`] - Document readers and record stores
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use labex::domain::TestStatus;
//!
//! let text = "PATIENT NAME : RAVI KUMAR\n\
//!             BIOCHEMISTRY\n\
//!             TOTAL BILIRUBIN 1.8↑ mg/dl 0.4-1.0\n";
//!
//! let result = labex::extraction::extract(text)?;
//!
//! assert_eq!(result.patient.name.as_deref(), Some("RAVI KUMAR"));
//! assert_eq!(result.lab_tests[0].status, TestStatus::High);
//! # Ok::<(), labex::domain::ExtractionError>(())
//! ```
//!
//! ## Error Handling
//!
//! Labex uses the [`domain::LabexError`] type for all errors:
//!
//! ```rust,no_run
//! use labex::domain::LabexError;
//!
//! fn example() -> Result<(), LabexError> {
//!     let config = labex::config::load_config("labex.toml")?;
//!     println!("Store: {}", config.store.path);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod extraction;
pub mod logging;
