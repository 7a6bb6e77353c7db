//! External collaborators of the extraction engine.
//!
//! - [`document`] - document-to-text conversion
//! - [`store`] - record persistence (trait-based)
//!
//! # Design Pattern
//!
//! Adapters isolate I/O from the pure extraction engine. Each collaborator is
//! a trait with one concrete implementation, so callers and tests can swap in
//! their own.
//!
//! ```rust,no_run
//! use labex::adapters::document::{DocumentToText, PlainTextAdapter};
//! use labex::adapters::store::{JsonLinesStore, RecordStore};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let text = PlainTextAdapter::new().extract_text(Path::new("report.txt"))?;
//! let result = labex::extraction::extract(&text)?;
//!
//! let store = JsonLinesStore::new("lab_results.jsonl");
//! let rows = store.append(&result, false).await?;
//! println!("Stored {rows} rows");
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod store;
