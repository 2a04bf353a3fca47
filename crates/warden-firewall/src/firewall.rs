//! Main firewall facade
//!
//! Bundles the sanitizers behind one configured value so callers can hold a
//! single handle instead of threading limits through every call site.

use serde::{Deserialize, Serialize};

use crate::classifier;
use crate::filename;
use crate::link;
use crate::models::{
    FirewallError, MaliciousContentVerdict, NumericInput, NumericValidationResult,
    SanitizationVerdict, UrlVerdict,
};
use crate::number;
use crate::text::{self, MAX_TEXT_LENGTH};

/// Firewall configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallConfig {
    /// Maximum sanitized text length in characters
    pub max_text_length: usize,
    /// Record each threat tag at most once per call
    pub dedupe_threats: bool,
}

impl Default for FirewallConfig {
    fn default() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            dedupe_threats: true,
        }
    }
}

impl FirewallConfig {
    /// Reject limits that would make every input overflow.
    pub fn validate(&self) -> Result<(), FirewallError> {
        if self.max_text_length == 0 {
            return Err(FirewallError::ZeroLimit {
                field: "max_text_length",
            });
        }
        Ok(())
    }
}

/// The boundary firewall - main interface
///
/// Stateless apart from its configuration, so it is cheap to clone and safe
/// to share between threads.
#[derive(Debug, Clone, Default)]
pub struct InputFirewall {
    config: FirewallConfig,
}

impl InputFirewall {
    /// Create a new firewall with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a firewall with custom config
    pub fn with_config(config: FirewallConfig) -> Result<Self, FirewallError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &FirewallConfig {
        &self.config
    }

    /// Sanitize free text, see [`crate::sanitize_text`].
    pub fn sanitize_text(&self, input: Option<&str>) -> SanitizationVerdict {
        text::sanitize_text_with(
            input,
            self.config.max_text_length,
            self.config.dedupe_threats,
        )
    }

    /// Validate a number against inclusive bounds.
    pub fn sanitize_number(
        &self,
        input: impl Into<NumericInput>,
        min: f64,
        max: f64,
    ) -> NumericValidationResult {
        number::sanitize_number(input, min, max)
    }

    /// Allow-list a URL.
    pub fn sanitize_url(&self, url: &str) -> UrlVerdict {
        link::sanitize_url(url)
    }

    /// Restrict an upload file name.
    pub fn sanitize_file_name(&self, name: &str) -> String {
        filename::sanitize_file_name(name)
    }

    /// Run the phishing heuristics.
    pub fn detect_malicious_content(&self, text: &str) -> MaliciousContentVerdict {
        classifier::detect_malicious_content(text)
    }
}
