//! Verdict types for facade decisions.

use serde::{Deserialize, Serialize};

/// The decision Warden hands back for a message or an action.
///
/// - `Allow`: nothing found, proceed
/// - `Block`: do not display or perform
/// - `Review`: usable, but something looked off; log or escalate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Passed every check.
    Allow,

    /// Failed a check that must not be ignored.
    Block {
        /// The reason for blocking.
        reason: BlockReason,
    },

    /// Passed, with findings worth a second look.
    Review {
        /// Flags indicating why review is suggested.
        flags: Vec<ReviewFlag>,
    },
}

impl Verdict {
    /// Create an Allow verdict.
    pub fn allow() -> Self {
        Self::Allow
    }

    /// Create a Block verdict with the given reason.
    pub fn block(reason: BlockReason) -> Self {
        Self::Block { reason }
    }

    /// Create a Review verdict, or Allow when there are no flags.
    pub fn review(flags: Vec<ReviewFlag>) -> Self {
        if flags.is_empty() {
            Self::Allow
        } else {
            Self::Review { flags }
        }
    }

    /// Returns true if this is an Allow verdict.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns true if this is a Block verdict.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// Returns true if this requires review.
    pub fn requires_review(&self) -> bool {
        matches!(self, Self::Review { .. })
    }
}

/// Reasons for blocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockReason {
    /// Executable markup was found (and stripped from the sanitized text).
    MarkupInjection {
        /// XSS tags recorded; one per rule when duplicate tags are kept.
        detections: usize,
    },

    /// The action's rate limit is exhausted for the current window.
    RateLimited {
        /// Throttled action name.
        action: String,
        /// Calls admitted per window.
        max_calls: usize,
        /// Window length in milliseconds.
        window_ms: u64,
    },
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkupInjection { detections } => {
                write!(f, "Markup injection ({} detections)", detections)
            }
            Self::RateLimited {
                action,
                max_calls,
                window_ms,
            } => {
                write!(
                    f,
                    "Rate limited '{}': {} calls per {}ms",
                    action, max_calls, window_ms
                )
            }
        }
    }
}

/// Findings that do not block on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewFlag {
    /// The text contains SQL-injection indicators.
    SqlIndicator,

    /// The text was truncated.
    LengthExceeded {
        /// Applied limit in characters.
        max: usize,
    },

    /// A phishing heuristic fired.
    SuspiciousContent {
        /// Classifier reason.
        reason: String,
    },
}

impl std::fmt::Display for ReviewFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SqlIndicator => write!(f, "SQL injection indicator"),
            Self::LengthExceeded { max } => write!(f, "Truncated to {} characters", max),
            Self::SuspiciousContent { reason } => write!(f, "Suspicious content: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_allow() {
        let verdict = Verdict::allow();
        assert!(verdict.is_allowed());
        assert!(!verdict.is_blocked());
        assert!(!verdict.requires_review());
    }

    #[test]
    fn test_verdict_block() {
        let verdict = Verdict::block(BlockReason::MarkupInjection { detections: 1 });
        assert!(!verdict.is_allowed());
        assert!(verdict.is_blocked());
    }

    #[test]
    fn test_empty_review_is_allow() {
        assert!(Verdict::review(vec![]).is_allowed());
        assert!(Verdict::review(vec![ReviewFlag::SqlIndicator]).requires_review());
    }

    #[test]
    fn test_display() {
        let reason = BlockReason::RateLimited {
            action: "place_order".to_string(),
            max_calls: 3,
            window_ms: 60_000,
        };
        assert_eq!(
            reason.to_string(),
            "Rate limited 'place_order': 3 calls per 60000ms"
        );
        assert_eq!(
            ReviewFlag::LengthExceeded { max: 10 }.to_string(),
            "Truncated to 10 characters"
        );
    }
}
