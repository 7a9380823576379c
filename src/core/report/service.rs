//! Report orchestration service
//!
//! Routes report operations to the configured providers:
//!
//! - **create** tries providers in priority order and commits to the first
//!   one that succeeds, registering the result in the mapping table
//! - **update** and **get** resolve the opaque id through the mapping table
//!   and talk only to the provider that stored the record
//!
//! Providers are attempted strictly one after another; a later provider is
//! never contacted while an earlier attempt is still pending.

use crate::adapters::providers::ReportProvider;
use crate::core::mapping::MappingTable;
use crate::domain::{ProviderMapping, Report, Result, SitelogError, StoredReport};
use crate::log_provider_failure;
use std::sync::Arc;

/// Orchestrates report operations across providers
pub struct ReportService {
    /// Providers in fallback order
    providers: Vec<Arc<dyn ReportProvider>>,

    /// Opaque id → provider record
    mappings: Arc<MappingTable>,
}

impl ReportService {
    /// Create a new service
    ///
    /// # Arguments
    ///
    /// * `providers` - Provider adapters; index 0 has the highest priority
    /// * `mappings` - Mapping table shared with any other service instance
    pub fn new(providers: Vec<Arc<dyn ReportProvider>>, mappings: Arc<MappingTable>) -> Self {
        Self {
            providers,
            mappings,
        }
    }

    /// Configured providers in fallback order
    pub fn providers(&self) -> &[Arc<dyn ReportProvider>] {
        &self.providers
    }

    /// Store a report on the first provider that accepts it
    ///
    /// When `force_error` is true, the highest-priority provider is asked to
    /// simulate unavailability, which exercises the fallback path.
    ///
    /// Provider errors are logged and never returned directly; each provider
    /// is tried once.
    ///
    /// # Errors
    ///
    /// Returns `SitelogError::FallbackExhausted` if every provider failed or
    /// no provider is configured.
    pub async fn create_with_fallback(
        &self,
        report: &Report,
        force_error: bool,
    ) -> Result<StoredReport> {
        for (index, provider) in self.providers.iter().enumerate() {
            let name = provider.name();

            match provider
                .create_report(report, force_error && index == 0)
                .await
            {
                Ok(created) => {
                    let api_id = self.mappings.create(name, created.id);

                    tracing::info!(
                        api_id = %api_id,
                        provider = %name,
                        report_id = %report.report_id,
                        fallback = index > 0,
                        "Report created"
                    );

                    return Ok(StoredReport {
                        id: api_id,
                        provider_name: name,
                    });
                }
                Err(e) => {
                    log_provider_failure!(name, index, e);
                }
            }
        }

        tracing::error!(
            report_id = %report.report_id,
            providers = self.providers.len(),
            "All providers failed to create report"
        );
        Err(SitelogError::FallbackExhausted)
    }

    /// Replace the report behind `api_id` on the provider that stores it
    ///
    /// There is no fallback: the provider-local id only exists on one provider.
    ///
    /// # Errors
    ///
    /// Returns `MappingNotFound` for an unknown id, `ProviderNotFound` when the
    /// storing provider is no longer configured, or the provider's own error.
    pub async fn update_report(&self, api_id: &str, report: &Report) -> Result<StoredReport> {
        let (mapping, provider) = self.resolve(api_id)?;

        provider.update_report(&mapping.provider_id, report).await?;

        tracing::info!(
            api_id = %api_id,
            provider = %mapping.provider,
            "Report updated"
        );

        Ok(StoredReport {
            id: api_id.to_string(),
            provider_name: mapping.provider,
        })
    }

    /// Fetch the report behind `api_id` from the provider that stores it
    ///
    /// # Errors
    ///
    /// Same as [`ReportService::update_report`].
    pub async fn get_report(&self, api_id: &str) -> Result<Report> {
        let (mapping, provider) = self.resolve(api_id)?;
        provider.get_report(&mapping.provider_id).await
    }

    fn resolve(&self, api_id: &str) -> Result<(ProviderMapping, &Arc<dyn ReportProvider>)> {
        let mapping = self.mappings.get(api_id)?;

        tracing::debug!(
            api_id = %mapping.api_id,
            provider = %mapping.provider,
            provider_id = %mapping.provider_id,
            "Resolved mapping"
        );

        let provider = self
            .providers
            .iter()
            .find(|p| p.name() == mapping.provider)
            .ok_or(SitelogError::ProviderNotFound(mapping.provider))?;

        Ok((mapping, provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::providers::{CreatedReport, ProviderPayload, VatePayload};
    use crate::domain::{ProviderName, TransportError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory provider with switchable failure
    struct MockProvider {
        name: ProviderName,
        fail: bool,
        create_calls: AtomicUsize,
        forced: AtomicBool,
        updated: AtomicUsize,
    }

    impl MockProvider {
        fn new(name: ProviderName, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                name,
                fail,
                create_calls: AtomicUsize::new(0),
                forced: AtomicBool::new(false),
                updated: AtomicUsize::new(0),
            })
        }

        fn error(&self) -> SitelogError {
            SitelogError::transport(
                self.name,
                TransportError::ServerError {
                    status: 503,
                    message: "Provedor indisponível".to_string(),
                },
            )
        }
    }

    #[async_trait]
    impl ReportProvider for MockProvider {
        fn name(&self) -> ProviderName {
            self.name
        }

        fn base_url(&self) -> &str {
            "mock://provider"
        }

        async fn create_report(
            &self,
            _report: &Report,
            force_error: bool,
        ) -> Result<CreatedReport> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if force_error {
                self.forced.store(true, Ordering::SeqCst);
            }
            if self.fail || force_error {
                return Err(self.error());
            }
            Ok(CreatedReport {
                id: format!("{}-123", self.name),
            })
        }

        async fn update_report(&self, _id: &str, _report: &Report) -> Result<()> {
            if self.fail {
                return Err(self.error());
            }
            self.updated.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn get_report(&self, id: &str) -> Result<Report> {
            if self.fail {
                return Err(self.error());
            }
            Ok(Report {
                provider_record_id: id.to_string(),
                ..sample_report()
            })
        }

        fn transform_to_provider_format(&self, report: &Report) -> ProviderPayload {
            ProviderPayload::Vate(VatePayload {
                obra_id: report.report_id.clone(),
                data: report.date.clone(),
                clima: report.weather.clone(),
                descricao: report.description.clone(),
                equipe: report.workers.clone(),
            })
        }
    }

    fn sample_report() -> Report {
        Report::new(
            "OBRA-123",
            "2024-03-20",
            "ensolarado",
            "Test description",
            vec!["Worker 1".to_string(), "Worker 2".to_string()],
        )
    }

    fn service_with(
        providers: Vec<Arc<MockProvider>>,
        mappings: &Arc<MappingTable>,
    ) -> ReportService {
        let providers = providers
            .into_iter()
            .map(|p| p as Arc<dyn ReportProvider>)
            .collect();
        ReportService::new(providers, Arc::clone(mappings))
    }

    #[tokio::test]
    async fn test_create_uses_first_provider() {
        let mappings = Arc::new(MappingTable::new());
        let vate = MockProvider::new(ProviderName::Vate, false);
        let argelor = MockProvider::new(ProviderName::Argelor, false);
        let service = service_with(vec![vate.clone(), argelor.clone()], &mappings);

        let stored = service
            .create_with_fallback(&sample_report(), false)
            .await
            .unwrap();

        assert_eq!(stored.provider_name, ProviderName::Vate);
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings.get(&stored.id).unwrap().provider_id, "VATE-123");
        assert_eq!(argelor.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_falls_back_to_second_provider() {
        let mappings = Arc::new(MappingTable::new());
        let vate = MockProvider::new(ProviderName::Vate, true);
        let argelor = MockProvider::new(ProviderName::Argelor, false);
        let service = service_with(vec![vate.clone(), argelor.clone()], &mappings);

        let stored = service
            .create_with_fallback(&sample_report(), false)
            .await
            .unwrap();

        assert_eq!(stored.provider_name, ProviderName::Argelor);
        assert_eq!(vate.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(argelor.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(mappings.get(&stored.id).unwrap().provider_id, "ARGELOR-123");
        assert_eq!(mappings.len(), 1);
    }

    #[tokio::test]
    async fn test_create_all_providers_fail() {
        let mappings = Arc::new(MappingTable::new());
        let vate = MockProvider::new(ProviderName::Vate, true);
        let argelor = MockProvider::new(ProviderName::Argelor, true);
        let service = service_with(vec![vate.clone(), argelor.clone()], &mappings);

        let err = service
            .create_with_fallback(&sample_report(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, SitelogError::FallbackExhausted));
        assert!(mappings.is_empty());
        assert_eq!(vate.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(argelor.create_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_with_no_providers() {
        let mappings = Arc::new(MappingTable::new());
        let service = ReportService::new(Vec::new(), Arc::clone(&mappings));

        let err = service
            .create_with_fallback(&sample_report(), true)
            .await
            .unwrap_err();

        assert!(matches!(err, SitelogError::FallbackExhausted));
        assert!(mappings.is_empty());
    }

    #[tokio::test]
    async fn test_force_error_only_reaches_first_provider() {
        let mappings = Arc::new(MappingTable::new());
        let vate = MockProvider::new(ProviderName::Vate, false);
        let argelor = MockProvider::new(ProviderName::Argelor, false);
        let service = service_with(vec![vate.clone(), argelor.clone()], &mappings);

        let stored = service
            .create_with_fallback(&sample_report(), true)
            .await
            .unwrap();

        assert_eq!(stored.provider_name, ProviderName::Argelor);
        assert!(vate.forced.load(Ordering::SeqCst));
        assert!(!argelor.forced.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_update_routes_to_storing_provider() {
        let mappings = Arc::new(MappingTable::new());
        let vate = MockProvider::new(ProviderName::Vate, false);
        let argelor = MockProvider::new(ProviderName::Argelor, false);
        let service = service_with(vec![vate.clone(), argelor.clone()], &mappings);

        let created = service
            .create_with_fallback(&sample_report(), true)
            .await
            .unwrap();

        let updated = Report {
            description: "Updated description".to_string(),
            ..sample_report()
        };
        let stored = service.update_report(&created.id, &updated).await.unwrap();

        assert_eq!(stored, created);
        assert_eq!(argelor.updated.load(Ordering::SeqCst), 1);
        assert_eq!(vate.updated.load(Ordering::SeqCst), 0);
        assert_eq!(mappings.len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_mapping_not_found() {
        let mappings = Arc::new(MappingTable::new());
        let service = service_with(
            vec![MockProvider::new(ProviderName::Vate, false)],
            &mappings,
        );

        let err = service
            .update_report("non-existent-id", &sample_report())
            .await
            .unwrap_err();

        assert!(matches!(err, SitelogError::MappingNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_with_missing_provider_is_provider_not_found() {
        let mappings = Arc::new(MappingTable::new());
        let service = service_with(
            vec![MockProvider::new(ProviderName::Vate, false)],
            &mappings,
        );
        let created = service
            .create_with_fallback(&sample_report(), false)
            .await
            .unwrap();

        let reconfigured = ReportService::new(Vec::new(), Arc::clone(&mappings));
        let err = reconfigured
            .update_report(&created.id, &sample_report())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SitelogError::ProviderNotFound(ProviderName::Vate)
        ));
    }

    #[tokio::test]
    async fn test_update_provider_failure_is_not_rerouted() {
        let mappings = Arc::new(MappingTable::new());
        let api_id = mappings.create(ProviderName::Vate, "VATE-123");
        let vate = MockProvider::new(ProviderName::Vate, true);
        let argelor = MockProvider::new(ProviderName::Argelor, false);
        let service = service_with(vec![vate, argelor.clone()], &mappings);

        let err = service
            .update_report(&api_id, &sample_report())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SitelogError::Transport {
                provider: ProviderName::Vate,
                ..
            }
        ));
        assert_eq!(argelor.updated.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_returns_provider_report() {
        let mappings = Arc::new(MappingTable::new());
        let service = service_with(
            vec![
                MockProvider::new(ProviderName::Vate, false),
                MockProvider::new(ProviderName::Argelor, false),
            ],
            &mappings,
        );
        let created = service
            .create_with_fallback(&sample_report(), false)
            .await
            .unwrap();

        let report = service.get_report(&created.id).await.unwrap();

        assert_eq!(report.provider_record_id, "VATE-123");
        assert_eq!(report.workers, sample_report().workers);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_mapping_not_found() {
        let mappings = Arc::new(MappingTable::new());
        let service = service_with(
            vec![MockProvider::new(ProviderName::Vate, false)],
            &mappings,
        );

        let err = service.get_report("non-existent-id").await.unwrap_err();
        assert!(matches!(err, SitelogError::MappingNotFound(_)));
    }

    #[tokio::test]
    async fn test_get_with_missing_provider_is_provider_not_found() {
        let mappings = Arc::new(MappingTable::new());
        let api_id = mappings.create(ProviderName::Argelor, "ARGELOR-456");
        let service = service_with(
            vec![MockProvider::new(ProviderName::Vate, false)],
            &mappings,
        );

        let err = service.get_report(&api_id).await.unwrap_err();
        assert!(matches!(
            err,
            SitelogError::ProviderNotFound(ProviderName::Argelor)
        ));
    }

    #[tokio::test]
    async fn test_get_provider_failure_propagates() {
        let mappings = Arc::new(MappingTable::new());
        let api_id = mappings.create(ProviderName::Argelor, "ARGELOR-456");
        let service = service_with(
            vec![
                MockProvider::new(ProviderName::Vate, false),
                MockProvider::new(ProviderName::Argelor, true),
            ],
            &mappings,
        );

        let err = service.get_report(&api_id).await.unwrap_err();
        assert!(matches!(
            err,
            SitelogError::Transport {
                provider: ProviderName::Argelor,
                ..
            }
        ));
    }
}
