//! Report provider adapters
//!
//! This module provides the provider-specific implementations of the report
//! API. The `ReportProvider` trait defines the common interface; [`VateProvider`]
//! and [`ArgelorProvider`] map the canonical report onto each backend's wire
//! format and share the HTTP plumbing in [`transport`].

pub mod argelor;
pub mod factory;
mod r#trait;
pub mod transport;
pub mod vate;

pub use argelor::{ArgelorPayload, ArgelorProvider};
pub use factory::create_providers;
pub use r#trait::{CreatedReport, ProviderPayload, ReportProvider};
pub use vate::{VatePayload, VateProvider};
