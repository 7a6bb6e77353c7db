//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Labex using clap.
//! Commands that produce extraction results write JSON to stdout and status
//! lines to stderr.

pub mod commands;

use clap::{Parser, Subcommand};

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "labex.toml";

/// Labex - Laboratory Report Extraction Tool
#[derive(Parser, Debug)]
#[command(name = "labex")]
#[command(version, about, long_about = None)]
#[command(author = "Labex Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "LABEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LABEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a structured result from a report and print it as JSON
    Extract(commands::extract::ExtractArgs),

    /// Extract a report and append its lab tests to the record store
    Analyze(commands::analyze::AnalyzeArgs),

    /// Show record store statistics
    Stats(commands::stats::StatsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["labex", "extract", "report.txt", "--compact"]);
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.file, PathBuf::from("report.txt"));
                assert!(args.compact);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_extract_requires_file() {
        assert!(Cli::try_parse_from(["labex", "extract"]).is_err());
    }

    #[test]
    fn test_cli_parse_analyze_dry_run() {
        let cli = Cli::parse_from(["labex", "analyze", "report.txt", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Analyze(ref a) if a.dry_run));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["labex", "--config", "custom.toml", "stats"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["labex", "--log-level", "debug", "stats"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["labex", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["labex", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref a) if a.force));
    }
}
