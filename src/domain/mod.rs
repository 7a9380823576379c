//! Domain models and types for Sitelog.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Report types** ([`Report`], [`StoredReport`], [`ProviderMapping`], [`Weather`])
//! - **Provider identity** ([`ProviderName`])
//! - **Error types** ([`SitelogError`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SitelogError>`]:
//!
//! ```rust
//! use sitelog::domain::{SitelogError, Result};
//!
//! fn lookup(found: bool) -> Result<()> {
//!     if !found {
//!         return Err(SitelogError::MappingNotFound("non-existent-id".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod report;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{SitelogError, TransportError};
pub use ids::ProviderName;
pub use report::{ProviderMapping, Report, StoredReport, Weather};
pub use result::Result;
