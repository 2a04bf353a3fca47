//! Text sanitization.
//!
//! Normalizes, scans, strips and truncates free text (names, addresses,
//! chat messages, reviews) before it is displayed or persisted.
//!
//! Pipeline, in order:
//!
//! 1. Absent input short-circuits to an empty, safe verdict
//! 2. NUL and ASCII control characters are stripped (tab/LF/CR survive)
//! 3. XSS catalog: tag and remove every match, rule by rule
//! 4. SQL catalog: tag only, text untouched
//! 5. Dangerous constructs and then the whole XSS catalog removed again,
//!    repeated until nothing changes
//! 6. Truncate to the length limit
//! 7. Trim surrounding whitespace

use std::fmt::Display;

use crate::models::{SanitizationVerdict, ThreatTag};
use crate::patterns::{dangerous_constructs, Pattern, SQL_PATTERNS, XSS_PATTERNS};

/// Default maximum length of sanitized text, in characters.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Sanitize free text with the default limits.
///
/// Total: never panics and never fails. `None` yields a safe, empty verdict.
///
/// # Example
///
/// ```rust
/// use warden_firewall::{sanitize_text, ThreatTag};
///
/// let verdict = sanitize_text(Some("SELECT * FROM users WHERE 1=1"));
/// assert!(!verdict.safe);
/// assert_eq!(verdict.threats, vec![ThreatTag::SqlInjectionDetected]);
/// // SQL indicators are flagged, never rewritten
/// assert_eq!(verdict.sanitized, "SELECT * FROM users WHERE 1=1");
/// ```
pub fn sanitize_text(input: Option<&str>) -> SanitizationVerdict {
    sanitize_text_with(input, MAX_TEXT_LENGTH, true)
}

/// Sanitize any displayable value by coercing it to text first.
pub fn sanitize_display<T: Display + ?Sized>(value: &T) -> SanitizationVerdict {
    sanitize_text(Some(&value.to_string()))
}

/// Sanitize with an explicit length limit and duplicate-tag policy.
///
/// With `dedupe` set each tag appears at most once, in first-detection order.
/// Without it one tag is recorded per matching rule.
pub(crate) fn sanitize_text_with(
    input: Option<&str>,
    max_length: usize,
    dedupe: bool,
) -> SanitizationVerdict {
    let Some(input) = input else {
        return SanitizationVerdict::empty();
    };

    let mut threats = Vec::new();
    let mut fired = vec![false; XSS_PATTERNS.len()];
    let mut working = strip_control_chars(input);

    for (rule, pattern) in XSS_PATTERNS.iter().enumerate() {
        if remove_matches(pattern, &mut working) {
            mark_fired(&mut fired, rule, &mut threats, dedupe);
        }
    }

    for pattern in SQL_PATTERNS.iter() {
        if pattern.regex.is_match(&working) {
            record(&mut threats, pattern.threat, dedupe);
        }
    }

    strip_reassembled(&mut working, &mut fired, &mut threats, dedupe);

    if let Some((cut, _)) = working.char_indices().nth(max_length) {
        working.truncate(cut);
        record(&mut threats, ThreatTag::LengthExceeded, dedupe);
    }

    SanitizationVerdict::new(working.trim().to_string(), threats)
}

/// Remove NUL and ASCII control characters except tab, LF and CR.
pub fn strip_control_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}'
            )
        })
        .collect()
}

/// Second removal pass. Repeats until stable so that a construct re-assembled
/// by an earlier removal (`<scr<script></script>ipt>`, `ev<img src=x>al(`) is
/// dropped as well. Each round re-applies the dangerous constructs and then
/// the full XSS catalog. A rule matching here for the first time still adds
/// its tag. Every removal shortens the string, so the loop terminates.
fn strip_reassembled(
    working: &mut String,
    fired: &mut [bool],
    threats: &mut Vec<ThreatTag>,
    dedupe: bool,
) {
    loop {
        let mut changed = false;
        let rounds = dangerous_constructs()
            .iter()
            .enumerate()
            .chain(XSS_PATTERNS.iter().enumerate());
        for (rule, pattern) in rounds {
            if remove_matches(pattern, working) {
                mark_fired(fired, rule, threats, dedupe);
                changed = true;
            }
        }
        if !changed {
            return;
        }
    }
}

/// Deletes every match of `pattern`; returns whether anything matched.
fn remove_matches(pattern: &Pattern, working: &mut String) -> bool {
    if !pattern.regex.is_match(working.as_str()) {
        return false;
    }
    *working = pattern.regex.replace_all(working.as_str(), "").into_owned();
    true
}

/// One tag per XSS rule, on the first time that rule matches.
fn mark_fired(fired: &mut [bool], rule: usize, threats: &mut Vec<ThreatTag>, dedupe: bool) {
    if !fired[rule] {
        fired[rule] = true;
        record(threats, ThreatTag::XssDetected, dedupe);
    }
}

fn record(threats: &mut Vec<ThreatTag>, tag: ThreatTag, dedupe: bool) {
    if !dedupe || !threats.contains(&tag) {
        threats.push(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_input_is_safe_and_empty() {
        let verdict = sanitize_text(None);
        assert!(verdict.safe);
        assert!(verdict.sanitized.is_empty());
        assert!(verdict.threats.is_empty());
    }

    #[test]
    fn test_plain_text_untouched() {
        let verdict = sanitize_text(Some("  Extra napkins please\n"));
        assert!(verdict.safe);
        assert_eq!(verdict.sanitized, "Extra napkins please");
    }

    #[test]
    fn test_strips_control_chars() {
        assert_eq!(strip_control_chars("He\x00ll\x07o\x1F\x7F"), "Hello");
        assert_eq!(strip_control_chars("a\tb\nc\rd"), "a\tb\nc\rd");
        assert_eq!(strip_control_chars("\x0B\x0C"), "");
    }

    #[test]
    fn test_control_chars_alone_are_not_a_threat() {
        let verdict = sanitize_text(Some("Pizza\x00 time"));
        assert!(verdict.safe);
        assert_eq!(verdict.sanitized, "Pizza time");
    }

    #[test]
    fn test_script_removed() {
        let verdict = sanitize_text(Some("<script>alert(1)</script>hello"));
        assert!(!verdict.safe);
        assert_eq!(verdict.threats, vec![ThreatTag::XssDetected]);
        assert_eq!(verdict.sanitized, "hello");
    }

    #[test]
    fn test_event_handler_and_img_removed() {
        let verdict = sanitize_text(Some("nice <img src=x onerror=alert(1)> food"));
        assert!(verdict.has_threat(ThreatTag::XssDetected));
        assert_eq!(verdict.sanitized, "nice  food");
    }

    #[test]
    fn test_control_char_split_tag_is_caught() {
        // NUL inside the tag name is stripped before scanning
        let verdict = sanitize_text(Some("<scr\x00ipt>steal()</script>ok"));
        assert!(verdict.has_threat(ThreatTag::XssDetected));
        assert_eq!(verdict.sanitized, "ok");
    }

    #[test]
    fn test_reassembled_script_removed_by_second_pass() {
        let verdict = sanitize_text(Some("<scr<script></script>ipt>alert(1)</script>done"));
        assert!(verdict.has_threat(ThreatTag::XssDetected));
        assert_eq!(verdict.sanitized, "done");
    }

    #[test]
    fn test_nested_reassembly_removed() {
        let verdict =
            sanitize_text(Some("<scr<scr<script></script>ipt></script>ipt>x</script>done"));
        assert_eq!(verdict.sanitized, "done");
    }

    #[test]
    fn test_sql_flagged_not_stripped() {
        let input = "SELECT * FROM users WHERE 1=1";
        let verdict = sanitize_text(Some(input));
        assert!(!verdict.safe);
        assert_eq!(verdict.threats, vec![ThreatTag::SqlInjectionDetected]);
        assert_eq!(verdict.sanitized, input);
    }

    #[test]
    fn test_length_exceeded() {
        let verdict = sanitize_text(Some(&"a".repeat(15_000)));
        assert_eq!(verdict.sanitized.chars().count(), MAX_TEXT_LENGTH);
        assert_eq!(verdict.threats, vec![ThreatTag::LengthExceeded]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let input = "é".repeat(MAX_TEXT_LENGTH);
        let verdict = sanitize_text(Some(&input));
        assert!(verdict.safe);
        assert_eq!(verdict.sanitized, input);
    }

    #[test]
    fn test_exact_limit_is_not_exceeded() {
        let verdict = sanitize_text(Some(&"b".repeat(MAX_TEXT_LENGTH)));
        assert!(verdict.safe);
    }

    #[test]
    fn test_dedupe_collapses_repeated_tags() {
        let input = "<script>x</script><iframe></iframe> javascript:go()";
        let deduped = sanitize_text_with(Some(input), MAX_TEXT_LENGTH, true);
        assert_eq!(deduped.threats, vec![ThreatTag::XssDetected]);

        let raw = sanitize_text_with(Some(input), MAX_TEXT_LENGTH, false);
        assert_eq!(raw.threats, vec![ThreatTag::XssDetected; 3]);
    }

    #[test]
    fn test_threat_order_follows_pipeline() {
        let input = format!("<svg>{}; drop", "z".repeat(20));
        let verdict = sanitize_text_with(Some(&input), 10, true);
        assert_eq!(
            verdict.threats,
            vec![
                ThreatTag::XssDetected,
                ThreatTag::SqlInjectionDetected,
                ThreatTag::LengthExceeded
            ]
        );
    }

    #[test]
    fn test_idempotent_on_markup() {
        let inputs = [
            "<script>alert(1)</script>hello",
            "<a href=\"javascript:void(0)\" onclick=\"x()\">hi</a>",
            "<iframe src=evil></iframe><object data=x>",
            "<scr<script></script>ipt>alert(1)</script>",
            "<svg onload=alert(1)>",
        ];
        for input in inputs {
            let once = sanitize_text(Some(input));
            let twice = sanitize_text(Some(&once.sanitized));
            assert!(twice.safe, "{input:?} -> {:?}", once.sanitized);
        }
    }

    #[test]
    fn test_idempotent_when_removal_joins_constructs() {
        let inputs = [
            "ev<img src=x>al(alert(1))",
            "<im<img src=a>g src=x onerror=alert(1)>",
            "width: expr<img src=q>ession(alert(1))",
        ];
        for input in inputs {
            let once = sanitize_text(Some(input));
            assert!(!once.safe);
            let twice = sanitize_text(Some(&once.sanitized));
            assert!(twice.safe, "{input:?} -> {:?}", once.sanitized);
            assert_eq!(twice.sanitized, once.sanitized);
        }
    }

    #[test]
    fn test_joined_constructs_removed() {
        assert_eq!(
            sanitize_text(Some("ev<img src=x>al(alert(1))")).sanitized,
            "alert(1))"
        );
        assert_eq!(
            sanitize_text(Some("<im<img src=a>g src=x onerror=alert(1)>")).sanitized,
            ""
        );
        assert_eq!(
            sanitize_text(Some("width: expr<img src=q>ession(alert(1))")).sanitized,
            "width: alert(1))"
        );
    }

    #[test]
    fn test_rule_tagged_once_across_passes() {
        // img_src_tag fires in both passes, eval_call only in the second
        let raw = sanitize_text_with(
            Some("<im<img src=a>g src=x>ev<img src=y>al(1)"),
            MAX_TEXT_LENGTH,
            false,
        );
        assert_eq!(raw.threats, vec![ThreatTag::XssDetected; 2]);
        assert_eq!(raw.sanitized, "1)");
    }

    #[test]
    fn test_sanitize_display_coerces() {
        let verdict = sanitize_display(&42);
        assert!(verdict.safe);
        assert_eq!(verdict.sanitized, "42");
    }
}
