//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SitelogConfig;
use crate::domain::errors::SitelogError;
use crate::domain::result::Result;
use crate::domain::ProviderName;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SitelogConfig
/// 4. Applies environment variable overrides (SITELOG_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sitelog::config::loader::load_config;
///
/// let config = load_config("sitelog.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SitelogConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SitelogError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SitelogError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: SitelogConfig = toml::from_str(&contents)
        .map_err(|e| SitelogError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finalize(config)
}

/// Loads configuration from a TOML file, or from defaults when the file is absent
///
/// Environment overrides and validation apply in both cases, so the server
/// can be configured through `SITELOG_*` variables alone.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be loaded, or if the
/// resulting configuration is invalid
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<SitelogConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    finalize(SitelogConfig::default())
}

fn finalize(mut config: SitelogConfig) -> Result<SitelogConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SitelogError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SitelogError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SitelogError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Reads `primary`, falling back to the unprefixed deployment variable
///
/// Returns the name of the variable that was read along with its value.
fn env_with_fallback<'a>(primary: &'a str, fallback: &'a str) -> Option<(&'a str, String)> {
    std::env::var(primary)
        .map(|val| (primary, val))
        .or_else(|_| std::env::var(fallback).map(|val| (fallback, val)))
        .ok()
}

/// Applies environment variable overrides using SITELOG_* prefix
///
/// Environment variables follow the pattern: SITELOG_<SECTION>_<KEY>
/// For example: SITELOG_SERVER_PORT, SITELOG_PROVIDERS_VATE_BASE_URL.
/// `SITELOG_PROVIDERS_ORDER` takes a comma-separated list (`ARGELOR,VATE`).
/// `PORT`, `VATE_URL` and `ARGELOR_URL` are honored when the matching
/// SITELOG_* variable is unset.
fn apply_env_overrides(config: &mut SitelogConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("SITELOG_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Server overrides
    if let Ok(val) = std::env::var("SITELOG_SERVER_HOST") {
        config.server.host = val;
    }
    if let Some((name, val)) = env_with_fallback("SITELOG_SERVER_PORT", "PORT") {
        config.server.port = val.parse().map_err(|_| {
            SitelogError::Configuration(format!("{name} is not a valid port: {val}"))
        })?;
    }

    // Provider overrides
    if let Ok(val) = std::env::var("SITELOG_PROVIDERS_ORDER") {
        config.providers.order = val
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(ProviderName::from_str)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                SitelogError::Configuration(format!("SITELOG_PROVIDERS_ORDER: {e}"))
            })?;
    }
    if let Some((_, val)) = env_with_fallback("SITELOG_PROVIDERS_VATE_BASE_URL", "VATE_URL") {
        config.providers.vate.base_url = val;
    }
    if let Some((_, val)) =
        env_with_fallback("SITELOG_PROVIDERS_ARGELOR_BASE_URL", "ARGELOR_URL")
    {
        config.providers.argelor.base_url = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SITELOG_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            SitelogError::Configuration(format!(
                "SITELOG_LOGGING_LOCAL_ENABLED is not a valid boolean: {val}"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("SITELOG_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SITELOG_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
