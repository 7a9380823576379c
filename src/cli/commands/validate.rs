//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Sitelog configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Unlike `serve`, a missing file is an error here.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after applying overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Bind Address: {}", config.server.bind_address());
        println!("  Provider Order:");
        for (priority, name) in config.providers.order.iter().enumerate() {
            println!(
                "    {}. {} ({})",
                priority + 1,
                name,
                config.providers.endpoint(*name).base_url
            );
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} (rotation: {})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}
