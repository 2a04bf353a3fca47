//! # Core Types for the Boundary Firewall
//!
//! This module defines the value types returned by every sanitizer and
//! validator in the crate: threat tags, verdicts, and the tagged numeric input.
//!
//! ## Design Principles
//!
//! 1. **Failures are data** - No sanitizer returns `Err`; a verdict always
//!    carries a usable value alongside what was found
//! 2. **Owned results** - Verdicts own their text, nothing borrows caller input
//! 3. **Serializable** - All types derive Serde traits for logging and audit trails
//!
//! Configuration errors are the only error type here, see [`FirewallError`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Labels for threats found by the text sanitizer.
///
/// | Variant | Raised by | Text effect |
/// |---------|-----------|-------------|
/// | `XssDetected` | XSS pattern catalog | Matching markup removed |
/// | `SqlInjectionDetected` | SQL indicator catalog | None, flag only |
/// | `LengthExceeded` | Length limit | Truncated |
///
/// Serialized with their wire names (`XSS_DETECTED`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ThreatTag {
    /// Executable markup or a script scheme was found and stripped.
    XssDetected,

    /// The text looks like it is trying to alter a backend query.
    ///
    /// This is an indicator only. Free-form prose such as "Tom; Jerry"
    /// trips it too, which is why the text is never rewritten.
    SqlInjectionDetected,

    /// The text was longer than the configured maximum and was truncated.
    LengthExceeded,
}

impl ThreatTag {
    /// Returns the stable wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatTag::XssDetected => "XSS_DETECTED",
            ThreatTag::SqlInjectionDetected => "SQL_INJECTION_DETECTED",
            ThreatTag::LengthExceeded => "LENGTH_EXCEEDED",
        }
    }
}

impl fmt::Display for ThreatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of sanitizing a piece of free text.
///
/// `safe` is always equal to `threats.is_empty()`. The sanitized text is
/// returned even when threats were found so the caller can choose to
/// display, log, or discard it.
///
/// # Example
///
/// ```rust
/// use warden_firewall::{sanitize_text, ThreatTag};
///
/// let verdict = sanitize_text(Some("<script>alert(1)</script>hello"));
/// assert!(!verdict.safe);
/// assert_eq!(verdict.sanitized, "hello");
/// assert!(verdict.has_threat(ThreatTag::XssDetected));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizationVerdict {
    /// `true` when no threat was recorded.
    pub safe: bool,
    /// The cleaned text.
    pub sanitized: String,
    /// Threats in the order they were first detected.
    pub threats: Vec<ThreatTag>,
}

impl SanitizationVerdict {
    /// Builds a verdict, deriving `safe` from the threat list.
    pub fn new(sanitized: String, threats: Vec<ThreatTag>) -> Self {
        Self {
            safe: threats.is_empty(),
            sanitized,
            threats,
        }
    }

    /// Verdict for absent input.
    pub fn empty() -> Self {
        Self::new(String::new(), Vec::new())
    }

    /// Returns `true` if the given tag was recorded.
    pub fn has_threat(&self, tag: ThreatTag) -> bool {
        self.threats.contains(&tag)
    }
}

/// Raw numeric input as received from a form field or an API payload.
///
/// Replaces "string or number" inputs with an explicit variant so each parse
/// branch is visible at the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Already numeric.
    Number(f64),
    /// Free text that should contain a number (e.g. `"$12.50"`).
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

/// Result of validating a numeric input.
///
/// `value` is the best-effort parse even when `is_valid` is `false`, so the
/// caller can show the offending value back to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericValidationResult {
    /// `true` when the value parsed and lies within bounds.
    pub is_valid: bool,
    /// Parsed value, `0.0` when nothing could be parsed.
    pub value: f64,
    /// Human-readable reason when invalid.
    pub error: Option<String>,
}

impl NumericValidationResult {
    pub(crate) fn valid(value: f64) -> Self {
        Self {
            is_valid: true,
            value,
            error: None,
        }
    }

    pub(crate) fn invalid(value: f64, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            value,
            error: Some(error.into()),
        }
    }
}

/// Result of checking a URL.
///
/// There is no partial rewriting: `sanitized` is either the untouched input
/// or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlVerdict {
    /// `true` when the URL may be used.
    pub safe: bool,
    /// The original URL when safe, empty otherwise.
    pub sanitized: String,
}

impl UrlVerdict {
    pub(crate) fn accept(url: &str) -> Self {
        Self {
            safe: true,
            sanitized: url.to_string(),
        }
    }

    pub(crate) fn reject() -> Self {
        Self {
            safe: false,
            sanitized: String::new(),
        }
    }
}

/// Result of the phishing / social-engineering classifier.
///
/// Advisory only; the classified text is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaliciousContentVerdict {
    /// `true` when no heuristic fired.
    pub is_safe: bool,
    /// Reasons in rule-evaluation order.
    pub reasons: Vec<String>,
}

/// Errors raised when building a firewall from invalid configuration.
///
/// Sanitizing never fails; only construction does.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FirewallError {
    /// A limit that must be positive was zero.
    #[error("invalid firewall config: {field} must be greater than zero")]
    ZeroLimit {
        /// Name of the offending field.
        field: &'static str,
    },
}
