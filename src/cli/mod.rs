//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Sitelog using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Sitelog - Daily report gateway with provider fallback
#[derive(Parser, Debug)]
#[command(name = "sitelog")]
#[command(version, about, long_about = None)]
#[command(author = "Sitelog Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sitelog.toml", env = "SITELOG_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SITELOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the report API server
    Serve(commands::serve::ServeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
