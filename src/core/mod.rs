//! Core business logic for Sitelog.
//!
//! This module contains the provider-independent orchestration of daily reports.
//!
//! # Modules
//!
//! - [`mapping`] - Opaque API id to provider record table
//! - [`report`] - Report service with ordered provider fallback
//!
//! # Request Workflow
//!
//! 1. **Create**: Try each provider in priority order until one stores the report
//! 2. **Register**: Mint an opaque id and record which provider holds the report
//! 3. **Update / Get**: Resolve the opaque id and call only that provider
//!
//! # Example
//!
//! ```rust,no_run
//! use sitelog::adapters::providers::create_providers;
//! use sitelog::config::load_config_or_default;
//! use sitelog::core::mapping::MappingTable;
//! use sitelog::core::report::ReportService;
//! use sitelog::domain::Report;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("sitelog.toml")?;
//! let providers = create_providers(&config.providers)?;
//! let service = ReportService::new(providers, Arc::new(MappingTable::new()));
//!
//! let report = Report::new(
//!     "OBRA-123",
//!     "2024-03-20",
//!     "ensolarado",
//!     "Concretagem da laje do segundo pavimento",
//!     vec!["Ana".to_string(), "Bob".to_string()],
//! );
//!
//! let stored = service.create_with_fallback(&report, false).await?;
//! println!("Stored {} on {}", stored.id, stored.provider_name);
//!
//! let fetched = service.get_report(&stored.id).await?;
//! println!("Workers: {:?}", fetched.workers);
//! # Ok(())
//! # }
//! ```

pub mod mapping;
pub mod report;
