//! Display adapter.
//!
//! What presentation components call right before rendering user-supplied
//! text or links. It returns something safe to show and, when configured,
//! logs what had to be removed. Only context labels and threat tags are
//! logged, never the raw text.

use tracing::warn;
use warden_firewall::InputFirewall;

use crate::config::DisplayConfig;

/// Sanitizing facade for rendering.
#[derive(Debug, Clone, Default)]
pub struct DisplayAdapter {
    firewall: InputFirewall,
    config: DisplayConfig,
}

impl DisplayAdapter {
    /// Create an adapter over a configured firewall.
    pub fn new(firewall: InputFirewall, config: DisplayConfig) -> Self {
        Self { firewall, config }
    }

    /// Sanitized text ready to render. Absent input renders as empty.
    pub fn display_text(&self, raw: Option<&str>) -> String {
        self.display_text_for("text", raw)
    }

    /// Same as [`display_text`](Self::display_text), labelling any log event
    /// with `context` (component or field name).
    pub fn display_text_for(&self, context: &str, raw: Option<&str>) -> String {
        let verdict = self.firewall.sanitize_text(raw);
        if self.config.log_threats && !verdict.safe {
            let threats: Vec<&str> = verdict.threats.iter().map(|t| t.as_str()).collect();
            warn!(context, ?threats, "threats removed from displayed text");
        }
        verdict.sanitized
    }

    /// The URL if it is safe to link to.
    pub fn display_url(&self, raw: &str) -> Option<String> {
        let verdict = self.firewall.sanitize_url(raw);
        if !verdict.safe {
            if self.config.log_threats {
                warn!("unsafe URL suppressed");
            }
            return None;
        }
        Some(verdict.sanitized)
    }
}
