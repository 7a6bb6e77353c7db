//! CLI command implementations

pub mod analyze;
pub mod extract;
pub mod init;
pub mod stats;
pub mod validate;

use super::DEFAULT_CONFIG_PATH;
use crate::config::{load_config, LabexConfig};
use crate::domain::Result;
use std::path::Path;

/// Loads the configuration for a command.
///
/// A missing file at the default location means "use defaults"; a missing
/// file named explicitly is a configuration error.
pub fn resolve_config(config_path: &str) -> Result<LabexConfig> {
    if config_path == DEFAULT_CONFIG_PATH && !Path::new(config_path).exists() {
        tracing::debug!(config_path, "No configuration file, using defaults");
        return Ok(LabexConfig::default());
    }
    load_config(config_path)
}

/// Serializes a value for stdout
fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
