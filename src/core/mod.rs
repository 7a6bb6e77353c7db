//! Core orchestration for Labex.
//!
//! # Modules
//!
//! - [`pipeline`] - document to text, extraction, record store append
//!
//! # Analysis Workflow
//!
//! 1. **Read**: Convert the document to text through the document adapter
//! 2. **Check**: Reject text shorter than `extraction.min_text_length`
//! 3. **Extract**: Run the extraction engine
//! 4. **Store**: Append one row per lab test to the record store
//! 5. **Report**: Return the result, export outcome and store statistics
//!
//! # Example
//!
//! ```rust,no_run
//! use labex::config::load_config;
//! use labex::core::pipeline::ReportPipeline;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("labex.toml")?;
//! let pipeline = ReportPipeline::new(&config)?;
//!
//! let outcome = pipeline.analyze(Path::new("report.txt")).await?;
//!
//! println!("Tests found: {}", outcome.result.lab_tests.len());
//! println!("Rows added: {}", outcome.export.rows_added);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;

pub use pipeline::{AnalysisOutcome, ExportInfo, ReportPipeline};
