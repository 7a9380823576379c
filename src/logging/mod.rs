//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logs with rotation
//!
//! # Example
//!
//! ```no_run
//! use sitelog::logging::init_logging;
//! use sitelog::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a provider failure that was absorbed by the fallback policy
///
/// # Example
///
/// ```no_run
/// use sitelog::log_provider_failure;
/// use sitelog::domain::{ProviderName, SitelogError, TransportError};
///
/// let error = SitelogError::transport(
///     ProviderName::Vate,
///     TransportError::Timeout("5s elapsed".to_string()),
/// );
/// log_provider_failure!(ProviderName::Vate, 0, &error);
/// ```
#[macro_export]
macro_rules! log_provider_failure {
    ($provider:expr, $index:expr, $error:expr) => {
        tracing::warn!(
            provider = %$provider,
            priority = $index,
            error = %$error,
            "Provider failed, trying next provider"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use sitelog::log_error_with_context;
/// use sitelog::domain::SitelogError;
///
/// let error = SitelogError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
