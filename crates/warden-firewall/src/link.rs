//! URL allow-listing.
//!
//! Only `http` and `https` survive. The raw input is also searched for
//! `javascript:` before parsing, which catches scheme-confusion tricks the
//! parser would otherwise normalize away (`java\tscript:`, leading spaces,
//! payloads hidden in a query string).

use ::url::Url;

use crate::models::UrlVerdict;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Check a URL before it is rendered as a link or fetched by the caller.
///
/// A safe verdict returns the input exactly as given, never a re-encoded form.
///
/// ```rust
/// use warden_firewall::sanitize_url;
///
/// assert_eq!(sanitize_url("https://example.com/a").sanitized, "https://example.com/a");
/// assert!(!sanitize_url("javascript:alert(1)").safe);
/// assert!(!sanitize_url("not a url").safe);
/// ```
pub fn sanitize_url(url: &str) -> UrlVerdict {
    if url.is_empty() {
        return UrlVerdict::accept(url);
    }

    if url.to_lowercase().contains("javascript:") {
        return UrlVerdict::reject();
    }

    match Url::parse(url) {
        Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => UrlVerdict::accept(url),
        _ => UrlVerdict::reject(),
    }
}
