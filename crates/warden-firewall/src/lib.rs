//! # Warden Firewall - Boundary Sanitization Layer
//!
//! The firewall is the stateless half of Warden. It inspects untrusted values
//! at the boundary where they enter the application (names, addresses, chat
//! text, reviews, prices, links, upload names) and returns a sanitized value
//! together with what it found.
//!
//! ## Threat Model
//!
//! | Threat | Example | Defense |
//! |--------|---------|---------|
//! | Stored / reflected XSS | `<script>`, `onerror=`, `javascript:` | Pattern strip, two passes |
//! | SQL injection attempts | `' OR 1=1 --` | Indicator flag (no rewrite) |
//! | Resource exhaustion | 1 MB review body | Length cap |
//! | Scheme confusion | `java\tscript:alert(1)` | Raw substring check + allow-list |
//! | Path traversal | `../../etc/passwd` | Charset restriction, dot collapse |
//! | Phishing / social engineering | "verify your account" | Advisory classifier |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      INPUT FIREWALL                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐   ┌─────────────────┐  │
//! │  │   PATTERN    │──▶│     TEXT     │   │   CLASSIFIER    │  │
//! │  │   CATALOG    │   │  SANITIZER   │   │ (phishing cues) │  │
//! │  └──────────────┘   └──────────────┘   └─────────────────┘  │
//! │  ┌──────────────┐   ┌──────────────┐   ┌─────────────────┐  │
//! │  │   NUMERIC    │   │     URL      │   │    FILE NAME    │  │
//! │  │  VALIDATOR   │   │  SANITIZER   │   │    SANITIZER    │  │
//! │  └──────────────┘   └──────────────┘   └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a pure function over its input and the static catalogs,
//! so all of them may be called concurrently without coordination. None of
//! them fails: problems are reported inside the returned value.
//!
//! ## Usage
//!
//! ```rust
//! use warden_firewall::{sanitize_text, sanitize_url, ThreatTag};
//!
//! let review = sanitize_text(Some("Great tacos <img src=x onerror=steal()>"));
//! assert!(review.has_threat(ThreatTag::XssDetected));
//! assert_eq!(review.sanitized, "Great tacos");
//!
//! let link = sanitize_url("https://example.com/menu");
//! assert!(link.safe);
//! ```

pub mod classifier;
pub mod filename;
pub mod firewall;
pub mod link;
pub mod models;
pub mod number;
pub mod patterns;
pub mod text;

pub use classifier::detect_malicious_content;
pub use filename::sanitize_file_name;
pub use firewall::{FirewallConfig, InputFirewall};
pub use link::sanitize_url;
pub use models::{
    FirewallError, MaliciousContentVerdict, NumericInput, NumericValidationResult,
    SanitizationVerdict, ThreatTag, UrlVerdict,
};
pub use number::{sanitize_number, sanitize_number_default, DEFAULT_MAX_NUMBER, DEFAULT_MIN_NUMBER};
pub use text::{sanitize_display, sanitize_text, MAX_TEXT_LENGTH};
