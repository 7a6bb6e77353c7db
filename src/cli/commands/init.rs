//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = crate::cli::DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Labex configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: labex validate-config");
                println!("  3. Analyze a report: labex analyze report.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn generate_config() -> &'static str {
        r#"# Labex Configuration File
# Laboratory report extraction

[application]
log_level = "info"
# Count rows instead of writing them
dry_run = false

[extraction]
# Documents with fewer characters are rejected before extraction
min_text_length = 50
pretty_output = true

[store]
# JSON-lines file, one row per lab test
path = "lab_results.jsonl"

[logging]
local_enabled = false
local_path = "logs"
# daily or hourly
local_rotation = "daily"
local_max_size_mb = 100
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_generated_config_loads() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("labex.toml");
        let args = InitArgs {
            output: output.display().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        let config = load_config(&output).unwrap();
        assert_eq!(config.extraction.min_text_length, 50);
    }

    #[tokio::test]
    async fn test_existing_file_requires_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("labex.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.display().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        let forced = InitArgs { force: true, ..args };
        assert_eq!(forced.execute().await.unwrap(), 0);
    }
}
