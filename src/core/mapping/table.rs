//! In-memory mapping table
//!
//! Mappings live for the lifetime of the process and are lost on restart.
//! The table is append-only: entries are inserted once and never updated or
//! removed, so concurrent requests never contend on an existing key.

use crate::domain::{ProviderMapping, ProviderName, Result, SitelogError};
use dashmap::DashMap;
use uuid::Uuid;

/// Maps opaque API ids to `(provider, provider-local id)`
///
/// # Example
///
/// ```
/// use sitelog::core::mapping::MappingTable;
/// use sitelog::domain::ProviderName;
///
/// let table = MappingTable::new();
/// let api_id = table.create(ProviderName::Vate, "VATE-123");
///
/// let mapping = table.get(&api_id).unwrap();
/// assert_eq!(mapping.provider, ProviderName::Vate);
/// assert_eq!(mapping.provider_id, "VATE-123");
/// ```
#[derive(Debug, Default)]
pub struct MappingTable {
    mappings: DashMap<String, ProviderMapping>,
}

impl MappingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stored record and return its freshly minted opaque id
    ///
    /// The id is a random UUID v4; collisions are not checked.
    pub fn create(&self, provider: ProviderName, provider_id: impl Into<String>) -> String {
        let api_id = Uuid::new_v4().to_string();
        let mapping = ProviderMapping {
            api_id: api_id.clone(),
            provider,
            provider_id: provider_id.into(),
        };

        tracing::debug!(
            api_id = %mapping.api_id,
            provider = %mapping.provider,
            provider_id = %mapping.provider_id,
            "Mapping created"
        );

        self.mappings.insert(api_id.clone(), mapping);
        api_id
    }

    /// Look up the mapping for an opaque id
    ///
    /// # Errors
    ///
    /// Returns `SitelogError::MappingNotFound` if `api_id` was never created.
    pub fn get(&self, api_id: &str) -> Result<ProviderMapping> {
        self.mappings
            .get(api_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| SitelogError::MappingNotFound(api_id.to_string()))
    }

    /// Number of mappings held
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use test_case::test_case;

    #[test_case(ProviderName::Vate, "VATE-123" ; "vate")]
    #[test_case(ProviderName::Argelor, "ARGELOR-456" ; "argelor")]
    fn test_create_then_get_returns_exact_mapping(provider: ProviderName, provider_id: &str) {
        let table = MappingTable::new();
        let api_id = table.create(provider, provider_id);

        assert!(Uuid::parse_str(&api_id).is_ok());
        assert_eq!(
            Uuid::parse_str(&api_id).unwrap().get_version_num(),
            4,
            "api ids must be UUID v4"
        );

        assert_eq!(
            table.get(&api_id).unwrap(),
            ProviderMapping {
                api_id: api_id.clone(),
                provider,
                provider_id: provider_id.to_string(),
            }
        );
    }

    #[test]
    fn test_distinct_ids_for_different_provider_ids() {
        let table = MappingTable::new();
        let first = table.create(ProviderName::Vate, "VATE-123");
        let second = table.create(ProviderName::Vate, "VATE-456");

        assert_ne!(first, second);
        assert_eq!(table.get(&first).unwrap().provider_id, "VATE-123");
        assert_eq!(table.get(&second).unwrap().provider_id, "VATE-456");
    }

    #[test]
    fn test_same_provider_id_on_different_providers() {
        let table = MappingTable::new();
        let vate = table.create(ProviderName::Vate, "REPORT-123");
        let argelor = table.create(ProviderName::Argelor, "REPORT-123");

        assert_ne!(vate, argelor);
        assert_eq!(table.get(&vate).unwrap().provider, ProviderName::Vate);
        assert_eq!(table.get(&argelor).unwrap().provider, ProviderName::Argelor);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_unknown_id_is_mapping_not_found() {
        let table = MappingTable::new();
        let err = table.get("non-existent-id").unwrap_err();

        assert!(matches!(err, SitelogError::MappingNotFound(ref id) if id == "non-existent-id"));
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_kept() {
        let table = Arc::new(MappingTable::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let table = Arc::clone(&table);
                tokio::spawn(async move { table.create(ProviderName::Argelor, format!("id-{i}")) })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        assert_eq!(table.len(), 32);
        for id in &ids {
            assert!(table.get(id).is_ok());
        }
    }
}
