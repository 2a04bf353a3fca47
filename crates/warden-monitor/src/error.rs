//! Error types for the rate limiting module.

use thiserror::Error;

/// Result type alias for monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors raised while constructing a limiter.
///
/// Checking a limiter never fails; a denied call is a `false`, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    /// A limit parameter that must be positive was zero.
    #[error("invalid rate limit: {field} must be greater than zero")]
    InvalidLimit {
        /// Name of the offending parameter
        field: &'static str,
    },
}
