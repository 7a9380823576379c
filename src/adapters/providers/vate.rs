//! Vate provider implementation
//!
//! Vate is the primary provider. It stores reports under `/reports` using
//! Portuguese field names (`obra_id`, `data`, `clima`, `descricao`, `equipe`).

use super::transport::{id_as_string, HttpTransport};
use super::{CreatedReport, ProviderPayload, ReportProvider};
use crate::config::ProviderEndpointConfig;
use crate::domain::{ProviderName, Report, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request body for `POST /reports` and `PUT /reports/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatePayload {
    pub obra_id: String,
    pub data: String,
    pub clima: String,
    pub descricao: String,
    pub equipe: Vec<String>,
}

/// Response of `POST /reports`
#[derive(Debug, Deserialize)]
struct VateCreateResponse {
    #[serde(deserialize_with = "id_as_string")]
    id: String,
    #[serde(rename = "createdAt", default)]
    created_at: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Response of `GET /reports/:id`
#[derive(Debug, Deserialize)]
struct VateRecord {
    #[serde(deserialize_with = "id_as_string")]
    id: String,
    #[serde(flatten)]
    payload: VatePayload,
}

/// Vate provider adapter
pub struct VateProvider {
    transport: HttpTransport,
}

impl VateProvider {
    /// Create a new Vate adapter
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &ProviderEndpointConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(ProviderName::Vate, &config.base_url)?,
        })
    }

    fn payload(report: &Report) -> VatePayload {
        VatePayload {
            obra_id: report.report_id.clone(),
            data: report.date.clone(),
            clima: report.weather.clone(),
            descricao: report.description.clone(),
            equipe: report.workers.clone(),
        }
    }
}

#[async_trait]
impl ReportProvider for VateProvider {
    fn name(&self) -> ProviderName {
        ProviderName::Vate
    }

    fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    async fn create_report(&self, report: &Report, force_error: bool) -> Result<CreatedReport> {
        let response: VateCreateResponse = self
            .transport
            .post("/reports", &Self::payload(report), force_error)
            .await?;

        tracing::debug!(
            report_id = %report.report_id,
            provider_id = %response.id,
            created_at = ?response.created_at,
            status = ?response.status,
            "Report stored in Vate"
        );

        Ok(CreatedReport { id: response.id })
    }

    async fn update_report(&self, id: &str, report: &Report) -> Result<()> {
        self.transport
            .put(&format!("/reports/{id}"), &Self::payload(report))
            .await
    }

    async fn get_report(&self, id: &str) -> Result<Report> {
        let record: VateRecord = self.transport.get(&format!("/reports/{id}")).await?;

        Ok(Report {
            provider_record_id: record.id,
            report_id: record.payload.obra_id,
            date: record.payload.data,
            weather: record.payload.clima,
            description: record.payload.descricao,
            workers: record.payload.equipe,
        })
    }

    fn transform_to_provider_format(&self, report: &Report) -> ProviderPayload {
        ProviderPayload::Vate(Self::payload(report))
    }
}
