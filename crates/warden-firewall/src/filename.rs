//! Upload file-name sanitization.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum file-name length, in characters.
pub const MAX_FILE_NAME_LENGTH: usize = 255;

static DOT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("built-in pattern must compile"));

/// Restrict a file name to `[A-Za-z0-9._-]`.
///
/// Every other character becomes `_`, runs of dots collapse to one (so no
/// `..` survives), and the result is cut to 255 characters. Total function.
///
/// ```rust
/// use warden_firewall::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("../../etc/passwd"), "._._etc_passwd");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    DOT_RUN
        .replace_all(&replaced, ".")
        .chars()
        .take(MAX_FILE_NAME_LENGTH)
        .collect()
}
