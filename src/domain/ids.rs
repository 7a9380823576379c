//! Provider identifiers
//!
//! The set of backend providers is closed, so provider identity is an enum
//! rather than a free-form string. The serialized form (`VATE`, `ARGELOR`) is
//! what appears in API responses and configuration files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a backend report provider
///
/// # Examples
///
/// ```
/// use sitelog::domain::ids::ProviderName;
/// use std::str::FromStr;
///
/// let provider = ProviderName::from_str("argelor").unwrap();
/// assert_eq!(provider, ProviderName::Argelor);
/// assert_eq!(provider.as_str(), "ARGELOR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProviderName {
    /// Primary provider (`/reports`)
    Vate,
    /// Secondary provider (`/daily-reports`)
    Argelor,
}

impl ProviderName {
    /// All known providers in default priority order
    pub const ALL: [ProviderName; 2] = [ProviderName::Vate, ProviderName::Argelor];

    /// Returns the canonical upper-case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Vate => "VATE",
            ProviderName::Argelor => "ARGELOR",
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VATE" => Ok(ProviderName::Vate),
            "ARGELOR" => Ok(ProviderName::Argelor),
            other => Err(format!(
                "Unknown provider '{other}'. Supported providers: VATE, ARGELOR"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_display() {
        assert_eq!(ProviderName::Vate.to_string(), "VATE");
        assert_eq!(ProviderName::Argelor.to_string(), "ARGELOR");
    }

    #[test]
    fn test_provider_name_from_str_is_case_insensitive() {
        assert_eq!(ProviderName::from_str("vate").unwrap(), ProviderName::Vate);
        assert_eq!(
            ProviderName::from_str(" Argelor ").unwrap(),
            ProviderName::Argelor
        );
        assert!(ProviderName::from_str("acme").is_err());
    }

    #[test]
    fn test_provider_name_serialization() {
        let json = serde_json::to_string(&ProviderName::Argelor).unwrap();
        assert_eq!(json, "\"ARGELOR\"");

        let parsed: ProviderName = serde_json::from_str("\"VATE\"").unwrap();
        assert_eq!(parsed, ProviderName::Vate);
    }
}
