//! Serve command implementation
//!
//! This module implements the `serve` command, which builds the provider
//! adapters from configuration and runs the HTTP API until shutdown.

use crate::api;
use crate::adapters::providers::create_providers;
use crate::config::load_config_or_default;
use crate::core::mapping::MappingTable;
use crate::core::report::ReportService;
use crate::log_error_with_context;
use anyhow::Context;
use clap::Args;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting serve command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(host) = &self.host {
            tracing::info!(host = %host, "Overriding bind host from CLI");
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            tracing::info!(port, "Overriding bind port from CLI");
            config.server.port = port;
        }

        if let Err(e) = config.validate() {
            log_error_with_context!(&e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let providers = match create_providers(&config.providers) {
            Ok(p) => p,
            Err(e) => {
                log_error_with_context!(&e, "Failed to create provider adapters");
                eprintln!("Failed to create provider adapters: {e}");
                return Ok(2);
            }
        };

        let service = Arc::new(ReportService::new(providers, Arc::new(MappingTable::new())));

        let bind_address = config.server.bind_address();
        let listener = TcpListener::bind(&bind_address)
            .await
            .with_context(|| format!("Failed to bind {bind_address}"))?;
        let local_address = listener
            .local_addr()
            .context("Failed to read bound address")?;

        tracing::info!(address = %local_address, "Sitelog API listening");
        for (priority, provider) in service.providers().iter().enumerate() {
            tracing::info!(
                provider = %provider.name(),
                priority,
                base_url = provider.base_url(),
                "Provider configured"
            );
        }
        println!("🚀 Sitelog API listening on http://{local_address}");

        api::serve(listener, api::router(service), shutdown_signal).await?;

        tracing::info!("Server stopped");
        println!("✅ Server stopped");
        Ok(0)
    }
}
