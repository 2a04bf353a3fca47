//! Configuration types for Warden.
//!
//! Loaded from TOML. Every section is optional and falls back to its
//! defaults:
//!
//! ```toml
//! [firewall]
//! max_text_length = 10000
//! dedupe_threats = true
//!
//! [display]
//! log_threats = true
//!
//! [limits.place_order]
//! max_calls = 3
//! window_ms = 60000
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use warden_firewall::FirewallConfig;
use warden_monitor::LimitConfig;

use crate::{error::WardenError, Result};

/// Configuration for the Warden facade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    /// Text sanitizer limits.
    pub firewall: FirewallConfig,

    /// Display adapter settings.
    pub display: DisplayConfig,

    /// One rate limit per throttled action, keyed by action name.
    pub limits: BTreeMap<String, LimitConfig>,
}

/// Display adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit a warning event whenever displayed text carried threats or an
    /// inspected message is blocked for markup.
    pub log_threats: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { log_threats: true }
    }
}

impl WardenConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| WardenError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| WardenError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Add or replace the limit for an action.
    #[must_use]
    pub fn with_limit(mut self, action: impl Into<String>, max_calls: usize, window_ms: u64) -> Self {
        self.limits.insert(
            action.into(),
            LimitConfig {
                max_calls,
                window_ms,
            },
        );
        self
    }

    /// Check every section for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        self.firewall.validate()?;
        for (action, limit) in &self.limits {
            limit
                .validate()
                .map_err(|e| WardenError::Config(format!("limit '{}': {}", action, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WardenConfig::default();
        assert_eq!(config.firewall.max_text_length, 10_000);
        assert!(config.display.log_threats);
        assert!(config.limits.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = WardenConfig::from_toml_str(
            r#"
            [firewall]
            max_text_length = 500

            [limits.send_message]
            max_calls = 5
            window_ms = 10000
            "#,
        )
        .unwrap();

        assert_eq!(config.firewall.max_text_length, 500);
        assert!(config.firewall.dedupe_threats);
        assert!(config.display.log_threats);
        assert_eq!(
            config.limits["send_message"],
            LimitConfig {
                max_calls: 5,
                window_ms: 10_000
            }
        );
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = WardenConfig::from_toml_str("[firewall\nmax_text_length = ").unwrap_err();
        assert!(matches!(err, WardenError::Config(_)));
    }

    #[test]
    fn test_validate_names_bad_limit() {
        let config = WardenConfig::default().with_limit("submit_review", 0, 1000);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("submit_review"), "{err}");
    }

    #[test]
    fn test_config_serialization() {
        let config = WardenConfig::default().with_limit("tip", 2, 5000);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: WardenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
