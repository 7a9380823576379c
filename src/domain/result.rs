//! Result type alias for Sitelog

use super::errors::SitelogError;

/// Result type alias for Sitelog operations
///
/// # Examples
///
/// ```
/// use sitelog::domain::result::Result;
/// use sitelog::domain::errors::SitelogError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SitelogError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SitelogError>;
