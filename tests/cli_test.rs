//! Integration tests for CLI argument parsing

use clap::Parser;
use labex::cli::{Cli, Commands, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;

#[test]
fn test_extract_with_output() {
    let cli = Cli::parse_from(["labex", "extract", "report.txt", "-o", "result.json"]);
    match cli.command {
        Commands::Extract(args) => {
            assert_eq!(args.file, PathBuf::from("report.txt"));
            assert_eq!(args.output, Some(PathBuf::from("result.json")));
            assert!(!args.compact);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_default_config_path() {
    let cli = Cli::parse_from(["labex", "validate-config"]);
    if std::env::var("LABEX_CONFIG").is_err() {
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
    }
}

#[test]
fn test_stats_json_flag() {
    let cli = Cli::parse_from(["labex", "stats", "--json"]);
    assert!(matches!(cli.command, Commands::Stats(ref a) if a.json));
}

#[test]
fn test_init_output() {
    let cli = Cli::parse_from(["labex", "init", "--output", "custom.toml"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, "custom.toml");
            assert!(!args.force);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["labex", "export"]).is_err());
}

#[test]
fn test_missing_command_rejected() {
    assert!(Cli::try_parse_from(["labex"]).is_err());
}
