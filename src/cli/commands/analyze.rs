//! Analyze command implementation
//!
//! Extracts one document, appends its lab tests to the record store and
//! prints the full outcome as JSON.

use super::{resolve_config, to_json};
use crate::core::ReportPipeline;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Report file to analyze
    pub file: PathBuf,

    /// Count the rows that would be stored without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(e.exit_code());
            }
        };

        let dry_run = self.dry_run || config.application.dry_run;
        let pipeline = ReportPipeline::new(&config)?.dry_run(dry_run);

        let outcome = match pipeline.analyze(&self.file).await {
            Ok(o) => o,
            Err(e) => {
                eprintln!("❌ Analysis failed: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("{}", to_json(&outcome, config.extraction.pretty_output)?);

        if outcome.export.success {
            eprintln!("✅ {}", outcome.export.message);
        } else {
            eprintln!("⚠️  {}", outcome.export.message);
        }
        eprintln!(
            "📊 Store: {} records, {} patients",
            outcome.stats.total_records, outcome.stats.unique_patients
        );

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::{JsonLinesStore, RecordStore};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[tokio::test]
    async fn test_analyze_appends_to_configured_store() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.txt");
        let store_path = dir.path().join("results.jsonl");
        std::fs::write(
            &input,
            "PATIENT NAME : LATA DEVI\nGLUCOSE 95 mg/dl 70-110\nUREA 30 mg/dl 15-40\n",
        )
        .unwrap();

        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "[store]\npath = {:?}", store_path.display().to_string()).unwrap();
        config.flush().unwrap();

        let args = AnalyzeArgs {
            file: input,
            dry_run: false,
        };
        let code = args
            .execute(config.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);

        let stats = JsonLinesStore::new(&store_path).stats().await.unwrap();
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.unique_patients, 1);
    }
}
