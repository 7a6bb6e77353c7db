// Labex - Laboratory Report Extraction Tool
// Copyright (c) 2025 Labex Contributors
// Licensed under the MIT License

use labex::cli::commands::resolve_config;
use labex::cli::{Cli, Commands};
use labex::config::LabexConfig;
use labex::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Configuration errors are reported by the command itself
    let config = resolve_config(&cli.config).unwrap_or_else(|_| LabexConfig::default());
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.application.log_level.clone());

    let guard = match init_logging(&log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Labex - Laboratory Report Extraction Tool"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Extract(args) => args.execute(&cli.config).await,
        Commands::Analyze(args) => args.execute(&cli.config).await,
        Commands::Stats(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
