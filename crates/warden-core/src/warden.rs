//! The unified Warden facade.
//!
//! This module provides the main entry point for callers that want one
//! handle for everything: a configured [`InputFirewall`], a
//! [`DisplayAdapter`], and one [`RateLimiter`] per configured action.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use warden_firewall::{InputFirewall, ThreatTag};
use warden_monitor::RateLimiter;

use crate::{
    config::WardenConfig,
    display::DisplayAdapter,
    error::WardenError,
    verdict::{BlockReason, ReviewFlag, Verdict},
    Result,
};

/// Outcome of [`Warden::inspect_message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReport {
    /// Sanitized message text.
    pub sanitized: String,
    /// Decision for the message.
    pub verdict: Verdict,
}

/// The unified Warden security facade.
///
/// Warden combines:
/// - **Firewall**: sanitizers, validators and the phishing classifier
/// - **Display adapter**: render-time sanitization with threat logging
/// - **Rate limiters**: one per configured action name
///
/// It is an ordinary owned value. Create one per scope that needs it (per
/// user session, per service); nothing is global.
///
/// # Example
///
/// ```rust
/// use warden_core::{Warden, WardenConfig};
///
/// let config = WardenConfig::default().with_limit("send_message", 2, 60_000);
/// let warden = Warden::new(config)?;
///
/// assert!(warden.check_action("send_message")?.is_allowed());
/// assert!(warden.inspect_message("See you at 7").verdict.is_allowed());
/// # Ok::<(), warden_core::WardenError>(())
/// ```
#[derive(Debug)]
pub struct Warden {
    config: WardenConfig,
    firewall: InputFirewall,
    display: DisplayAdapter,
    limiters: HashMap<String, RateLimiter>,
}

impl Warden {
    /// Create a Warden with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any section of the configuration is invalid.
    pub fn new(config: WardenConfig) -> Result<Self> {
        config.validate()?;

        let firewall = InputFirewall::with_config(config.firewall.clone())?;
        let display = DisplayAdapter::new(firewall.clone(), config.display.clone());

        let limiters = config
            .limits
            .iter()
            .map(|(action, limit)| -> Result<(String, RateLimiter)> {
                Ok((action.clone(), RateLimiter::from_config(limit)?))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        debug!(actions = limiters.len(), "Warden initialized");

        Ok(Self {
            config,
            firewall,
            display,
            limiters,
        })
    }

    /// The configured firewall.
    pub fn firewall(&self) -> &InputFirewall {
        &self.firewall
    }

    /// The configured display adapter.
    pub fn display(&self) -> &DisplayAdapter {
        &self.display
    }

    /// Sanitize a user message and decide what to do with it.
    ///
    /// Any XSS detection blocks, with a warning event when
    /// `display.log_threats` is set. SQL indicators, truncation and phishing
    /// cues ask for review. The classifier sees the raw message so stripped markup
    /// cannot hide phishing language.
    pub fn inspect_message(&self, text: &str) -> MessageReport {
        let verdict = self.firewall.sanitize_text(Some(text));

        let detections = verdict
            .threats
            .iter()
            .filter(|t| **t == ThreatTag::XssDetected)
            .count();
        if detections > 0 {
            if self.config.display.log_threats {
                warn!(detections, "message blocked: markup injection");
            }
            return MessageReport {
                sanitized: verdict.sanitized,
                verdict: Verdict::block(BlockReason::MarkupInjection { detections }),
            };
        }

        let mut flags = Vec::new();
        if verdict.has_threat(ThreatTag::SqlInjectionDetected) {
            flags.push(ReviewFlag::SqlIndicator);
        }
        if verdict.has_threat(ThreatTag::LengthExceeded) {
            flags.push(ReviewFlag::LengthExceeded {
                max: self.config.firewall.max_text_length,
            });
        }
        flags.extend(
            self.firewall
                .detect_malicious_content(text)
                .reasons
                .into_iter()
                .map(|reason| ReviewFlag::SuspiciousContent { reason }),
        );

        if !flags.is_empty() {
            debug!(flags = flags.len(), "message flagged for review");
        }

        MessageReport {
            sanitized: verdict.sanitized,
            verdict: Verdict::review(flags),
        }
    }

    /// Record an attempt at `action` against its limiter.
    ///
    /// # Errors
    ///
    /// [`WardenError::UnknownAction`] when no limit is configured for `action`.
    pub fn check_action(&self, action: &str) -> Result<Verdict> {
        let limiter = self.limiter(action)?;
        if limiter.is_allowed() {
            return Ok(Verdict::allow());
        }

        debug!(action, "action rate limited");
        Ok(Verdict::block(BlockReason::RateLimited {
            action: action.to_string(),
            max_calls: limiter.max_calls(),
            window_ms: u64::try_from(limiter.window().as_millis()).unwrap_or(u64::MAX),
        }))
    }

    /// Calls left for `action` in the current window.
    pub fn remaining_calls(&self, action: &str) -> Result<usize> {
        Ok(self.limiter(action)?.remaining_calls())
    }

    fn limiter(&self, action: &str) -> Result<&RateLimiter> {
        self.limiters
            .get(action)
            .ok_or_else(|| WardenError::UnknownAction(action.to_string()))
    }
}
