// Sitelog - Daily report gateway with provider fallback
// Copyright (c) 2025 Sitelog Contributors
// Licensed under the MIT License

//! # Sitelog - Daily report gateway
//!
//! Sitelog stores construction-site daily reports on one of several external
//! report providers and hides which provider holds each record behind an
//! opaque id.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Creating** reports with ordered fallback across providers
//! - **Routing** updates and reads to the provider that stored the record
//! - **Translating** the canonical report to each provider's wire format
//! - **Serving** the report API over HTTP
//!
//! ## Architecture
//!
//! Sitelog follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - HTTP routes, request validation and error responses
//! - [`core`] - Orchestration (fallback, id mapping)
//! - [`adapters`] - Provider integrations (VATE, ARGELOR)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sitelog::adapters::providers::create_providers;
//! use sitelog::config::load_config_or_default;
//! use sitelog::core::mapping::MappingTable;
//! use sitelog::core::report::ReportService;
//! use sitelog::domain::Report;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("sitelog.toml")?;
//!     let service = ReportService::new(
//!         create_providers(&config.providers)?,
//!         Arc::new(MappingTable::new()),
//!     );
//!
//!     let report = Report::new(
//!         "OBRA-123",
//!         "2024-03-20",
//!         "ensolarado",
//!         "Concretagem da laje do segundo pavimento",
//!         vec!["Ana".to_string(), "Bob".to_string()],
//!     );
//!
//!     let stored = service.create_with_fallback(&report, false).await?;
//!     println!("Stored {} on {}", stored.id, stored.provider_name);
//!     Ok(())
//! }
//! ```
//!
//! ## Fallback
//!
//! On create, providers are tried one at a time in the configured order. The
//! first success wins and every failure before it is logged and skipped. If
//! all providers fail the caller gets [`domain::SitelogError::FallbackExhausted`]
//! and nothing is recorded.
//!
//! Updates and reads never fall back: the record only exists on the provider
//! that stored it.
//!
//! ## Error Handling
//!
//! Sitelog uses the [`domain::SitelogError`] type for all library errors:
//!
//! ```rust,no_run
//! use sitelog::domain::SitelogError;
//!
//! fn example() -> Result<(), SitelogError> {
//!     let config = sitelog::config::load_config("sitelog.toml")?;
//!     println!("{}", config.server.bind_address());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
