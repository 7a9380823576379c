//! Configuration management for Sitelog.
//!
//! Sitelog uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SITELOG_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sitelog::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("sitelog.toml")?;
//! println!("Listening on {}", config.server.bind_address());
//! println!("Provider order: {:?}", config.providers.order);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [providers]
//! order = ["VATE", "ARGELOR"]
//!
//! [providers.vate]
//! base_url = "${VATE_URL}"
//!
//! [providers.argelor]
//! base_url = "http://localhost:3002"
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, LoggingConfig, ProviderEndpointConfig, ProvidersConfig, ServerConfig,
    SitelogConfig,
};
