//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LabexConfig;
use crate::domain::errors::LabexError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern must compile")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LabexConfig
/// 4. Applies environment variable overrides (LABEX_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`LabexError::Configuration`] if the file is missing or unreadable,
/// a referenced variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use labex::config::loader::load_config;
///
/// let config = load_config("labex.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LabexConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LabexError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LabexError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: LabexConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LabexError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched. All missing variables are reported
/// together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = ENV_PLACEHOLDER.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LabexError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using LABEX_* prefix
///
/// Environment variables follow the pattern: LABEX_<SECTION>_<KEY>
/// For example: LABEX_STORE_PATH, LABEX_EXTRACTION_MIN_TEXT_LENGTH
fn apply_env_overrides(config: &mut LabexConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("LABEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("LABEX_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Extraction overrides
    if let Ok(val) = std::env::var("LABEX_EXTRACTION_MIN_TEXT_LENGTH") {
        if let Ok(length) = val.parse() {
            config.extraction.min_text_length = length;
        }
    }
    if let Ok(val) = std::env::var("LABEX_EXTRACTION_PRETTY_OUTPUT") {
        config.extraction.pretty_output = val.parse().unwrap_or(true);
    }

    // Store overrides
    if let Ok(val) = std::env::var("LABEX_STORE_PATH") {
        config.store.path = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("LABEX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LABEX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("LABEX_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
