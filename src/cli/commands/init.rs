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
    #[arg(short, long, default_value = "sitelog.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Sitelog configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your provider URLs", self.output);
                println!("  2. Optionally set VATE_URL and ARGELOR_URL in a .env file");
                println!("  3. Validate configuration: sitelog validate-config");
                println!("  4. Start the API: sitelog serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every setting at its default
    fn generate_config() -> String {
        r#"# Sitelog Configuration File
# Daily report gateway with provider fallback

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[server]
host = "0.0.0.0"
port = 3000

[providers]
# Fallback order on create; the first provider has the highest priority
order = ["VATE", "ARGELOR"]

[providers.vate]
# Use "${VATE_URL}" to read the URL from the environment
base_url = "http://localhost:3001"

[providers.argelor]
# Use "${ARGELOR_URL}" to read the URL from the environment
base_url = "http://localhost:3002"

[logging]
# JSON log file in addition to console output
local_enabled = true
local_path = "logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
