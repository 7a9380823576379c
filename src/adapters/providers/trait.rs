//! Report provider trait definition
//!
//! This module defines the `ReportProvider` trait that abstracts the
//! provider-specific REST APIs. The orchestration service only ever talks to
//! providers through this trait, so adding a backend means adding one
//! implementation and one [`ProviderName`] variant.

use super::argelor::ArgelorPayload;
use super::vate::VatePayload;
use crate::domain::{ProviderName, Report, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identifier returned by a provider after a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedReport {
    /// Provider-local record identifier
    pub id: String,
}

/// A report in one provider's wire format
///
/// Serializes without a tag, i.e. exactly as the provider expects the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProviderPayload {
    Vate(VatePayload),
    Argelor(ArgelorPayload),
}

/// Trait for report provider implementations
///
/// Implementations translate the canonical [`Report`] into the provider's
/// payload and perform the HTTP call. They hold no mutable state, so a single
/// instance can serve concurrent requests.
///
/// Every error returned by an implementation is a
/// [`SitelogError::Transport`](crate::domain::SitelogError::Transport)
/// carrying [`ReportProvider::name`].
///
/// # Example
///
/// ```no_run
/// use sitelog::adapters::providers::{ReportProvider, VateProvider};
/// use sitelog::config::ProviderEndpointConfig;
/// use sitelog::domain::Report;
///
/// # async fn example() -> sitelog::domain::Result<()> {
/// let provider = VateProvider::new(&ProviderEndpointConfig::new("http://localhost:3001"))?;
///
/// let report = Report::new(
///     "OBRA-123",
///     "2024-03-20",
///     "ensolarado",
///     "Concretagem da laje do segundo pavimento",
///     vec!["Ana".to_string(), "Bob".to_string()],
/// );
///
/// let created = provider.create_report(&report, false).await?;
/// let stored = provider.get_report(&created.id).await?;
/// assert_eq!(stored.workers, report.workers);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ReportProvider: Send + Sync {
    /// Identity of this provider, used for mappings and logging
    fn name(&self) -> ProviderName;

    /// Base URL of the provider's API
    fn base_url(&self) -> &str;

    /// Store a new report
    ///
    /// When `force_error` is true the request asks the provider to simulate
    /// unavailability (`x-simulate-error: true`).
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, times out, or the
    /// provider answers with a non-success status.
    async fn create_report(&self, report: &Report, force_error: bool) -> Result<CreatedReport>;

    /// Replace the report stored under `id`
    ///
    /// # Errors
    ///
    /// Returns a transport error, with `TransportError::NotFound` when the
    /// provider does not know `id`.
    async fn update_report(&self, id: &str, report: &Report) -> Result<()>;

    /// Fetch the report stored under `id` and translate it back
    ///
    /// The returned report's `provider_record_id` is the provider's own `id` field.
    ///
    /// # Errors
    ///
    /// Returns a transport error, with `TransportError::NotFound` when the
    /// provider does not know `id`.
    async fn get_report(&self, id: &str) -> Result<Report>;

    /// Map the canonical report onto the provider's field names
    fn transform_to_provider_format(&self, report: &Report) -> ProviderPayload;
}
