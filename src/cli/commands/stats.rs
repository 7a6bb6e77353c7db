//! Stats command implementation

use super::{resolve_config, to_json};
use crate::adapters::store::create_record_store;
use clap::Args;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsArgs {
    /// Execute the stats command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(e.exit_code());
            }
        };

        let store = create_record_store(&config)?;
        let stats = match store.stats().await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Failed to read record store: {e}");
                return Ok(e.exit_code());
            }
        };

        if self.json {
            println!("{}", to_json(&stats, config.extraction.pretty_output)?);
            return Ok(0);
        }

        println!("📊 Record Store: {}", stats.path);
        if !stats.exists {
            println!("   No records stored yet");
            return Ok(0);
        }
        println!("   Total records: {}", stats.total_records);
        println!("   Unique patients: {}", stats.unique_patients);

        Ok(0)
    }
}
