//! Argelor provider implementation
//!
//! Argelor is the secondary provider. It stores reports under
//! `/daily-reports` and returns its record id as `report_id` on create.
//!
//! The `site` field carries the caller's report id. Earlier gateways sent the
//! empty provider record id there, so records they stored on ARGELOR read
//! back with an empty `report_id`. Payloads from this adapter are not
//! byte-identical to theirs.

use super::transport::{id_as_string, HttpTransport};
use super::{CreatedReport, ProviderPayload, ReportProvider};
use crate::config::ProviderEndpointConfig;
use crate::domain::{ProviderName, Report, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request body for `POST /daily-reports` and `PUT /daily-reports/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgelorPayload {
    pub site: String,
    pub report_date: String,
    pub weather: String,
    pub summary: String,
    pub workers: Vec<String>,
}

/// Response of `POST /daily-reports`
#[derive(Debug, Deserialize)]
struct ArgelorCreateResponse {
    #[serde(deserialize_with = "id_as_string")]
    report_id: String,
    #[serde(default)]
    created: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

/// Response of `GET /daily-reports/:id`
#[derive(Debug, Deserialize)]
struct ArgelorRecord {
    #[serde(deserialize_with = "id_as_string")]
    id: String,
    #[serde(flatten)]
    payload: ArgelorPayload,
}

/// Argelor provider adapter
pub struct ArgelorProvider {
    transport: HttpTransport,
}

impl ArgelorProvider {
    /// Create a new Argelor adapter
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &ProviderEndpointConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(ProviderName::Argelor, &config.base_url)?,
        })
    }

    // `site` carries the caller's report id; `get_report` reads it back into `report_id`.
    fn payload(report: &Report) -> ArgelorPayload {
        ArgelorPayload {
            site: report.report_id.clone(),
            report_date: report.date.clone(),
            weather: report.weather.clone(),
            summary: report.description.clone(),
            workers: report.workers.clone(),
        }
    }
}

#[async_trait]
impl ReportProvider for ArgelorProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Argelor
    }

    fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    async fn create_report(&self, report: &Report, force_error: bool) -> Result<CreatedReport> {
        let response: ArgelorCreateResponse = self
            .transport
            .post("/daily-reports", &Self::payload(report), force_error)
            .await?;

        tracing::debug!(
            report_id = %report.report_id,
            provider_id = %response.report_id,
            created = ?response.created,
            state = ?response.state,
            "Report stored in Argelor"
        );

        Ok(CreatedReport {
            id: response.report_id,
        })
    }

    async fn update_report(&self, id: &str, report: &Report) -> Result<()> {
        self.transport
            .put(&format!("/daily-reports/{id}"), &Self::payload(report))
            .await
    }

    async fn get_report(&self, id: &str) -> Result<Report> {
        let record: ArgelorRecord = self.transport.get(&format!("/daily-reports/{id}")).await?;

        Ok(Report {
            provider_record_id: record.id,
            report_id: record.payload.site,
            date: record.payload.report_date,
            weather: record.payload.weather,
            description: record.payload.summary,
            workers: record.payload.workers,
        })
    }

    fn transform_to_provider_format(&self, report: &Report) -> ProviderPayload {
        ProviderPayload::Argelor(Self::payload(report))
    }
}
