//! Error types for Warden Core.

use thiserror::Error;

/// Core error type for warden operations.
#[derive(Debug, Error)]
pub enum WardenError {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No limiter is configured under this action name.
    #[error("Unknown action: '{0}'")]
    UnknownAction(String),

    /// Firewall error passthrough.
    #[error("Firewall error: {0}")]
    Firewall(#[from] warden_firewall::FirewallError),

    /// Monitor error passthrough.
    #[error("Monitor error: {0}")]
    Monitor(#[from] warden_monitor::MonitorError),
}
