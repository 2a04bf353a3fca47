//! Numeric input validation for prices, quantities and tip amounts.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{NumericInput, NumericValidationResult};

/// Default inclusive lower bound.
pub const DEFAULT_MIN_NUMBER: f64 = 0.0;

/// Default inclusive upper bound: the largest integer an `f64` holds exactly.
pub const DEFAULT_MAX_NUMBER: f64 = 9_007_199_254_740_991.0;

/// Longest leading float, e.g. `12.5` out of `12.5.3` or `-0.75` out of `-.75-`.
static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("built-in pattern must compile")
});

/// Validate a number against inclusive bounds.
///
/// Text input is reduced to digits, `.` and `-` before parsing, so `"$1,250.00"`
/// reads as `1250`. Only the leading float is parsed; anything after it is
/// ignored.
///
/// # Example
///
/// ```rust
/// use warden_firewall::sanitize_number;
///
/// let result = sanitize_number("15", 0.0, 10.0);
/// assert!(!result.is_valid);
/// assert_eq!(result.value, 15.0);
///
/// assert!(sanitize_number(7, 0.0, 10.0).is_valid);
/// ```
pub fn sanitize_number(input: impl Into<NumericInput>, min: f64, max: f64) -> NumericValidationResult {
    let parsed = match input.into() {
        NumericInput::Number(n) => Some(n),
        NumericInput::Text(text) => parse_leading_float(&text),
    };

    let value = match parsed {
        Some(v) if v.is_finite() => v,
        _ => return NumericValidationResult::invalid(0.0, "Invalid number"),
    };

    if value < min {
        return NumericValidationResult::invalid(value, format!("Value must be at least {min}"));
    }
    if value > max {
        return NumericValidationResult::invalid(value, format!("Value must be at most {max}"));
    }
    NumericValidationResult::valid(value)
}

/// [`sanitize_number`] with the default bounds.
pub fn sanitize_number_default(input: impl Into<NumericInput>) -> NumericValidationResult {
    sanitize_number(input, DEFAULT_MIN_NUMBER, DEFAULT_MAX_NUMBER)
}

fn parse_leading_float(text: &str) -> Option<f64> {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let prefix = LEADING_FLOAT.find(&filtered)?;
    prefix.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_invalid_zero() {
        let result = sanitize_number_default("abc");
        assert!(!result.is_valid);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.error.as_deref(), Some("Invalid number"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!sanitize_number_default("").is_valid);
        assert!(!sanitize_number_default("-").is_valid);
        assert!(!sanitize_number_default("--5").is_valid);
    }

    #[test]
    fn test_above_max_keeps_value() {
        let result = sanitize_number("15", 0.0, 10.0);
        assert!(!result.is_valid);
        assert_eq!(result.value, 15.0);
        assert_eq!(result.error.as_deref(), Some("Value must be at most 10"));
    }

    #[test]
    fn test_below_min_keeps_value() {
        let result = sanitize_number("-3", 0.0, 10.0);
        assert!(!result.is_valid);
        assert_eq!(result.value, -3.0);
        assert_eq!(result.error.as_deref(), Some("Value must be at least 0"));
    }

    #[test]
    fn test_in_range_valid() {
        let result = sanitize_number("7", 0.0, 10.0);
        assert!(result.is_valid);
        assert_eq!(result.value, 7.0);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(sanitize_number(0, 0.0, 10.0).is_valid);
        assert!(sanitize_number(10, 0.0, 10.0).is_valid);
    }

    #[test]
    fn test_currency_and_separators_stripped() {
        assert_eq!(sanitize_number_default("$1,250.50").value, 1250.5);
        assert_eq!(sanitize_number_default("tip: 3.5 USD").value, 3.5);
    }

    #[test]
    fn test_only_leading_float_parsed() {
        assert_eq!(sanitize_number_default("1.2.3").value, 1.2);
        assert_eq!(sanitize_number_default("4-2").value, 4.0);
        assert_eq!(sanitize_number("-.5", -1.0, 1.0).value, -0.5);
    }

    #[test]
    fn test_non_finite_number_rejected() {
        let result = sanitize_number_default(f64::NAN);
        assert!(!result.is_valid);
        assert_eq!(result.value, 0.0);
        assert!(!sanitize_number_default(f64::INFINITY).is_valid);
    }

    #[test]
    fn test_default_max() {
        assert!(sanitize_number_default(DEFAULT_MAX_NUMBER).is_valid);
        assert!(!sanitize_number_default(DEFAULT_MAX_NUMBER * 2.0).is_valid);
    }
}
