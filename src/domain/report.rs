//! Report domain model
//!
//! This module defines the provider-agnostic report representation and the
//! small records the orchestration core hands back to callers.

use super::ids::ProviderName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical daily report
///
/// This is the internal representation shared by every provider adapter.
/// Field values are validated at the HTTP boundary before a `Report` is
/// built, so the core assumes `workers` is non-empty and `weather` is one of
/// the [`Weather`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Identifier assigned by the provider that stores the record.
    /// Empty until the report is read back from a provider.
    pub provider_record_id: String,

    /// Caller-supplied logical report identifier
    pub report_id: String,

    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,

    /// Weather condition
    pub weather: String,

    /// Free-text description of the day
    pub description: String,

    /// Crew members present
    pub workers: Vec<String>,
}

impl Report {
    /// Creates a report that has not been stored by any provider yet
    pub fn new(
        report_id: impl Into<String>,
        date: impl Into<String>,
        weather: impl Into<String>,
        description: impl Into<String>,
        workers: Vec<String>,
    ) -> Self {
        Self {
            provider_record_id: String::new(),
            report_id: report_id.into(),
            date: date.into(),
            weather: weather.into(),
            description: description.into(),
            workers,
        }
    }
}

/// Weather conditions accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Ensolarado,
    Chuvoso,
    Nublado,
    Tempestuoso,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Ensolarado,
        Weather::Chuvoso,
        Weather::Nublado,
        Weather::Tempestuoso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Ensolarado => "ensolarado",
            Weather::Chuvoso => "chuvoso",
            Weather::Nublado => "nublado",
            Weather::Tempestuoso => "tempestuoso",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weather::ALL
            .into_iter()
            .find(|weather| weather.as_str() == s)
            .ok_or_else(|| {
                format!("Weather must be one of: ensolarado, chuvoso, nublado, tempestuoso; got '{s}'")
            })
    }
}

/// Result of a create or update: the opaque id plus the provider that holds the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReport {
    /// Opaque API identifier
    pub id: String,

    /// Provider that stores the record
    pub provider_name: ProviderName,
}

/// Binding between an opaque API id and the provider-local record
///
/// Created once per successful create and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMapping {
    /// Opaque identifier exposed to callers (UUID v4)
    pub api_id: String,

    /// Provider that stored the record
    pub provider: ProviderName,

    /// Identifier assigned by that provider
    pub provider_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_new_has_empty_provider_record_id() {
        let report = Report::new(
            "OBRA-123",
            "2024-03-20",
            "ensolarado",
            "Concretagem da laje",
            vec!["Ana".to_string()],
        );
        assert!(report.provider_record_id.is_empty());
        assert_eq!(report.report_id, "OBRA-123");
    }

    #[test]
    fn test_weather_round_trips_through_str() {
        for weather in Weather::ALL {
            assert_eq!(Weather::from_str(weather.as_str()).unwrap(), weather);
        }
    }

    #[test]
    fn test_weather_rejects_unknown_and_wrong_case() {
        assert!(Weather::from_str("Sunny").is_err());
        assert!(Weather::from_str("Ensolarado").is_err());
        assert!(Weather::from_str("").is_err());
    }
}
