//! Extract command implementation
//!
//! Runs the extraction engine over one document and prints the structured
//! result as JSON. The record store is not touched.

use super::{resolve_config, to_json};
use crate::core::ReportPipeline;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Report file to extract
    pub file: PathBuf,

    /// Write the JSON result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print compact single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file.display(), "Extracting report");

        let config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(e.exit_code());
            }
        };

        let pipeline = ReportPipeline::new(&config)?;
        let result = match pipeline.extract_file(&self.file) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("❌ Extraction failed: {e}");
                return Ok(e.exit_code());
            }
        };

        let pretty = config.extraction.pretty_output && !self.compact;
        let json = to_json(&result, pretty)?;

        match &self.output {
            Some(output) => {
                std::fs::write(output, format!("{json}\n"))?;
                eprintln!(
                    "✅ Extracted {} lab tests ({} abnormal) to {}",
                    result.lab_tests.len(),
                    result.abnormal_count(),
                    output.display()
                );
            }
            None => println!("{json}"),
        }

        Ok(0)
    }
}
