//! Configuration management for Labex.
//!
//! # Overview
//!
//! Labex uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LABEX_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use labex::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("labex.toml")?;
//!
//! println!("Record store: {}", config.store.path);
//! println!("Minimum text length: {}", config.extraction.min_text_length);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run mode
//! - [`ExtractionConfig`] - Minimum text length and output formatting
//! - [`StoreConfig`] - Record store location
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [extraction]
//! min_text_length = 50
//!
//! [store]
//! path = "${LABEX_DATA_DIR}/lab_results.jsonl"
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, ExtractionConfig, LabexConfig, LoggingConfig, StoreConfig};
