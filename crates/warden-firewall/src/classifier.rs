//! Phishing and social-engineering heuristics.
//!
//! Advisory classification for user-to-user text (chat, reviews, support
//! messages). Rules are evaluated in catalog order against the raw text and
//! every match contributes its reason. Nothing is stripped.
//!
//! | Rule | Shape |
//! |------|-------|
//! | `account_verification` | verify / confirm / update ... account |
//! | `urgent_link` | click ... link ... urgent |
//! | `password_expiry` | password ... expire |
//! | `account_suspended` | suspended ... account |
//! | `refund_lure` | refund ... number |

use regex::Regex;
use std::sync::LazyLock;

use crate::models::MaliciousContentVerdict;

/// A social-engineering heuristic with its human-readable reason.
struct PhishingRule {
    name: &'static str,
    pattern: Regex,
    reason: &'static str,
}

static RULES: LazyLock<Vec<PhishingRule>> = LazyLock::new(|| {
    [
        (
            "account_verification",
            r"(?is)\b(?:verify|confirm|update)\b.*\baccount",
            "Requests account verification or update",
        ),
        (
            "urgent_link",
            r"(?is)\bclick\b.*\blink\b.*\burgent",
            "Urgent request to click a link",
        ),
        (
            "password_expiry",
            r"(?is)\bpassword\b.*\bexpir",
            "Claims a password is expiring",
        ),
        (
            "account_suspended",
            r"(?is)\bsuspended\b.*\baccount",
            "Claims an account has been suspended",
        ),
        (
            "refund_lure",
            r"(?is)\brefund.*\d",
            "Offers a refund with a specific amount",
        ),
    ]
    .into_iter()
    .map(|(name, source, reason)| PhishingRule {
        name,
        pattern: Regex::new(source).expect("built-in pattern must compile"),
        reason,
    })
    .collect()
});

/// Classify text against the phishing heuristics.
///
/// ```rust
/// use warden_firewall::detect_malicious_content;
///
/// let verdict = detect_malicious_content("Your account was suspended. Verify your account now");
/// assert!(!verdict.is_safe);
/// assert_eq!(verdict.reasons.len(), 2);
/// ```
pub fn detect_malicious_content(text: &str) -> MaliciousContentVerdict {
    let reasons: Vec<String> = RULES
        .iter()
        .filter(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.reason.to_string())
        .collect();

    MaliciousContentVerdict {
        is_safe: reasons.is_empty(),
        reasons,
    }
}

/// Names of the rules that fire, in catalog order.
pub fn matching_rules(text: &str) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.name)
        .collect()
}
