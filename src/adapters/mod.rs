//! External system integrations for Sitelog.
//!
//! - [`providers`] - Backend report providers (Vate, Argelor)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. Providers sit behind the
//! [`providers::ReportProvider`] trait, so the orchestration core never sees a
//! wire format.
//!
//! ```rust,no_run
//! use sitelog::adapters::providers::create_providers;
//! use sitelog::config::ProvidersConfig;
//!
//! # fn example() -> sitelog::domain::Result<()> {
//! let providers = create_providers(&ProvidersConfig::default())?;
//! for provider in &providers {
//!     println!("{} -> {}", provider.name(), provider.base_url());
//! }
//! # Ok(())
//! # }
//! ```

pub mod providers;
