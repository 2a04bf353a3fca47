//! # Warden Core
//!
//! Unified boundary-security facade.
//! Ties together the Input Firewall, the Display Adapter and per-action
//! Rate Limiters.
//!
//! ## Threat Coverage
//!
//! | Layer | Component | Threats Handled |
//! |-------|-----------|-----------------|
//! | Content | Input Firewall | XSS markup, SQL injection, oversize text, bad URLs, traversal names |
//! | Social | Classifier | Phishing and account-takeover lures |
//! | Volume | Rate Limiter | Floods, brute force, spam |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         WARDEN CORE                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                    ┌─────────────────┐                          │
//! │                    │     Warden      │  ← Unified Facade        │
//! │                    └────────┬────────┘                          │
//! │         ┌───────────────────┼───────────────────┐               │
//! │         ▼                   ▼                   ▼               │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐          │
//! │  │   Input     │    │   Display   │    │    Rate     │          │
//! │  │  Firewall   │    │   Adapter   │    │  Limiters   │          │
//! │  └─────────────┘    └─────────────┘    └─────────────┘          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use warden_core::{Verdict, Warden, WardenConfig};
//!
//! let warden = Warden::new(WardenConfig::default())?;
//!
//! let report = warden.inspect_message("<b onclick=x()>hi</b>");
//! match report.verdict {
//!     Verdict::Allow => println!("show: {}", report.sanitized),
//!     Verdict::Review { flags } => println!("show, but log: {:?}", flags),
//!     Verdict::Block { reason } => println!("reject: {}", reason),
//! }
//! # Ok::<(), warden_core::WardenError>(())
//! ```
//!
//! ## Security Notes
//!
//! - Sanitizers never fail; only configuration does
//! - Markup always blocks; indicators and lures ask for review
//! - Raw user text never reaches the logs

mod config;
mod display;
mod error;
mod verdict;
mod warden;

pub use config::{DisplayConfig, WardenConfig};
pub use display::DisplayAdapter;
pub use error::WardenError;
pub use verdict::{BlockReason, ReviewFlag, Verdict};
pub use warden::{MessageReport, Warden};

// Re-export component types for convenience
pub use warden_firewall::{
    detect_malicious_content, sanitize_file_name, sanitize_number, sanitize_text, sanitize_url,
    FirewallConfig, InputFirewall, MaliciousContentVerdict, NumericInput, NumericValidationResult,
    SanitizationVerdict, ThreatTag, UrlVerdict,
};
pub use warden_monitor::{create_rate_limiter, LimitConfig, RateLimiter};

/// Core result type for warden operations.
pub type Result<T> = std::result::Result<T, WardenError>;
