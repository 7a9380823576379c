//! Domain error types
//!
//! This module defines the error hierarchy for Sitelog.
//! Errors are domain-specific and don't expose third-party types: HTTP client
//! and server errors are converted to strings at the adapter edge.

use super::ids::ProviderName;
use thiserror::Error;

/// Main Sitelog error type
///
/// Each variant corresponds to one error kind the orchestration core can
/// raise. The HTTP boundary maps these variants to response codes.
#[derive(Debug, Error)]
pub enum SitelogError {
    /// A provider call failed, timed out, or returned an error status
    #[error("Provider {provider} failed: {source}")]
    Transport {
        provider: ProviderName,
        #[source]
        source: TransportError,
    },

    /// Every configured provider failed during a create (or none is configured)
    #[error("All providers failed")]
    FallbackExhausted,

    /// The opaque report id does not resolve to any known mapping
    #[error("Report {0} not found")]
    MappingNotFound(String),

    /// The mapping points at a provider that is not currently configured
    #[error("Provider {0} not found")]
    ProviderNotFound(ProviderName),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Anything outside the modeled taxonomy
    #[error("{0}")]
    Other(String),
}

impl SitelogError {
    /// Wraps a transport failure with the identity of the provider that raised it
    pub fn transport(provider: ProviderName, source: TransportError) -> Self {
        SitelogError::Transport { provider, source }
    }

    /// Returns true when the error is a provider reporting an unknown record
    pub fn is_provider_not_found(&self) -> bool {
        matches!(
            self,
            SitelogError::Transport {
                source: TransportError::NotFound(_),
                ..
            }
        )
    }
}

/// Provider transport errors
///
/// Errors that occur when talking to a backend provider over HTTP.
/// Timeouts get their own variant for logging, but callers treat every
/// variant as a plain transport failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to connect to the provider
    #[error("Failed to connect to provider: {0}")]
    ConnectionFailed(String),

    /// The call exceeded the per-request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The provider does not know the requested record (404)
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx other than 404)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// The provider answered with a body that could not be decoded
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),
}

impl TransportError {
    /// Builds the error for a non-success status code
    ///
    /// `message` is the provider's `error` field when present, otherwise the raw body.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => TransportError::NotFound(message),
            500..=599 => TransportError::ServerError { status, message },
            _ => TransportError::ClientError { status, message },
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SitelogError {
    fn from(err: std::io::Error) -> Self {
        SitelogError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SitelogError {
    fn from(err: toml::de::Error) -> Self {
        SitelogError::Configuration(format!("TOML parse error: {err}"))
    }
}
