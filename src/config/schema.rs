//! Configuration schema types
//!
//! This module defines the configuration structure for Sitelog. Every section
//! has defaults, so an empty file (or no file at all) yields a working local
//! setup with Vate on port 3001 and Argelor on port 3002.

use crate::domain::ProviderName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main Sitelog configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitelogConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend providers
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SitelogConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.server.validate()?;
        self.providers.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("server.host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("server.port must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Backend provider configuration
///
/// `order` is the fallback order used on create. A provider's endpoint may be
/// configured without the provider appearing in `order`; it is then unused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Providers in priority order
    #[serde(default = "default_provider_order")]
    pub order: Vec<ProviderName>,

    /// Vate endpoint
    #[serde(default = "ProviderEndpointConfig::default_vate")]
    pub vate: ProviderEndpointConfig,

    /// Argelor endpoint
    #[serde(default = "ProviderEndpointConfig::default_argelor")]
    pub argelor: ProviderEndpointConfig,
}

impl ProvidersConfig {
    fn validate(&self) -> Result<(), String> {
        if self.order.is_empty() {
            return Err("providers.order cannot be empty".to_string());
        }

        let mut seen = HashSet::new();
        for name in &self.order {
            if !seen.insert(name) {
                return Err(format!("providers.order lists {name} more than once"));
            }
        }

        self.vate.validate("providers.vate")?;
        self.argelor.validate("providers.argelor")?;
        Ok(())
    }

    /// Endpoint configuration for a provider
    pub fn endpoint(&self, name: ProviderName) -> &ProviderEndpointConfig {
        match name {
            ProviderName::Vate => &self.vate,
            ProviderName::Argelor => &self.argelor,
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            order: default_provider_order(),
            vate: ProviderEndpointConfig::default_vate(),
            argelor: ProviderEndpointConfig::default_argelor(),
        }
    }
}

/// Connection settings for one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpointConfig {
    /// Base URL of the provider API
    pub base_url: String,
}

impl ProviderEndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn default_vate() -> Self {
        Self::new("http://localhost:3001")
    }

    pub fn default_argelor() -> Self {
        Self::new("http://localhost:3002")
    }

    fn validate(&self, section: &str) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err(format!("{section}.base_url cannot be empty"));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("{section}.base_url is not a valid URL: {e}"))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "{section}.base_url must start with http:// or https://"
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local_enabled is true".to_string(),
            );
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_provider_order() -> Vec<ProviderName> {
    ProviderName::ALL.to_vec()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
