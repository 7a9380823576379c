//! Provider factory
//!
//! This module builds the provider adapter list from configuration.

use super::{ArgelorProvider, ReportProvider, VateProvider};
use crate::config::ProvidersConfig;
use crate::domain::{ProviderName, Result};
use std::sync::Arc;

/// Create the provider adapters in the configured priority order
///
/// The order of the returned list is the fallback order used on create.
///
/// # Arguments
///
/// * `config` - Provider configuration (order and endpoints)
///
/// # Errors
///
/// Returns an error if an adapter cannot be initialized
pub fn create_providers(config: &ProvidersConfig) -> Result<Vec<Arc<dyn ReportProvider>>> {
    config
        .order
        .iter()
        .map(|name| -> Result<Arc<dyn ReportProvider>> {
            let provider: Arc<dyn ReportProvider> = match name {
                ProviderName::Vate => Arc::new(VateProvider::new(config.endpoint(*name))?),
                ProviderName::Argelor => {
                    Arc::new(ArgelorProvider::new(config.endpoint(*name))?)
                }
            };

            tracing::debug!(
                provider = %provider.name(),
                base_url = provider.base_url(),
                "Provider adapter created"
            );

            Ok(provider)
        })
        .collect()
}
