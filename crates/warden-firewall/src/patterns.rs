//! # Pattern Catalog
//!
//! Static, ordered detection rules for the text sanitizer.
//!
//! Each entry carries a snake_case name used in tests and logs, the
//! [`ThreatTag`] it raises, and a regex source compiled once on first use.
//! All rules are case-insensitive and match anywhere in the input.
//!
//! | Catalog | Entries | On match |
//! |---------|---------|----------|
//! | [`XSS_PATTERNS`] | 8 | tag + remove every match |
//! | [`SQL_PATTERNS`] | 4 | tag only |
//! | [`dangerous_constructs`] | first 5 XSS entries | removed again first in each second-pass round |
//!
//! Order matters only for the order of recorded threats: every matching rule
//! contributes.
//!
//! ## Limitations
//!
//! These are indicator heuristics, not an HTML or SQL parser. They exist to
//! flag and neutralize the common shapes, not to guarantee detection.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::ThreatTag;

/// A compiled detection rule.
#[derive(Debug)]
pub struct Pattern {
    /// Short identifier, e.g. `script_block`.
    pub name: &'static str,
    /// Tag recorded when the rule matches.
    pub threat: ThreatTag,
    /// Compiled matcher.
    pub regex: Regex,
}

impl Pattern {
    fn compile(name: &'static str, threat: ThreatTag, source: &str) -> Self {
        Self {
            name,
            threat,
            regex: Regex::new(source).expect("built-in pattern must compile"),
        }
    }
}

/// Number of leading [`XSS_PATTERNS`] entries re-applied by the second
/// removal pass.
const DANGEROUS_CONSTRUCT_COUNT: usize = 5;

// ---- XSS -----------------------------------------------------------------
// The first DANGEROUS_CONSTRUCT_COUNT entries form the second-pass set; keep
// them at the front.
const XSS_SOURCES: &[(&str, &str)] = &[
    ("script_block", r"(?is)<script\b.*?</script\s*>"),
    ("iframe_block", r"(?is)<iframe\b.*?</iframe\s*>"),
    ("event_handler_attr", r"(?i)\bon\w+\s*="),
    ("javascript_scheme", r"(?i)javascript\s*:"),
    (
        "dangerous_tag_open",
        r"(?i)<\s*(?:object|embed|applet|meta|link|style|svg)\b[^>]*>",
    ),
    ("eval_call", r"(?i)\beval\s*\("),
    ("css_expression", r"(?i)\bexpression\s*\("),
    ("img_src_tag", r"(?i)<img\b[^>]*\bsrc\b[^>]*>"),
];

// ---- SQL indicators ------------------------------------------------------
const SQL_SOURCES: &[(&str, &str)] = &[
    (
        "sql_keyword",
        r"(?i)\b(?:select|insert|update|delete|drop|create|alter|exec|execute|union)\b",
    ),
    ("sql_comment_or_terminator", r"--|/\*|\*/|;"),
    ("boolean_injection", r"(?i)\b(?:or|and)\b.*[=<>]"),
    ("union_select_from", r"(?is)\bunion\b.*\bselect\b.*\bfrom\b"),
];

/// XSS indicators, evaluated in order.
pub static XSS_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    XSS_SOURCES
        .iter()
        .map(|(name, source)| Pattern::compile(name, ThreatTag::XssDetected, source))
        .collect()
});

/// SQL-injection indicators, evaluated in order.
pub static SQL_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    SQL_SOURCES
        .iter()
        .map(|(name, source)| Pattern::compile(name, ThreatTag::SqlInjectionDetected, source))
        .collect()
});

/// Script/iframe blocks, event-handler attributes, `javascript:` and
/// dangerous tag openings.
pub fn dangerous_constructs() -> &'static [Pattern] {
    &XSS_PATTERNS[..DANGEROUS_CONSTRUCT_COUNT]
}
