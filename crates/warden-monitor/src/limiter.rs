//! # Sliding-Window Rate Limiter
//!
//! Throttles repeated client actions (placing orders, sending messages,
//! submitting reviews) by counting calls in the trailing window.
//!
//! ## Threat Model
//!
//! Without throttling a client can:
//! - **Flood** an endpoint with repeated submissions
//! - **Brute force** codes or credentials through a form
//! - **Spam** other users through chat or reviews
//!
//! ## Design
//!
//! Each limiter keeps an ascending deque of accepted-call timestamps.
//! Entries older than `now - window` are evicted lazily from the front on
//! every [`RateLimiter::is_allowed`]; nothing runs in the background.
//! A denied attempt is not recorded, so hammering a closed limiter does not
//! extend the lockout.
//!
//! ## Security Notes
//!
//! - Read, evict, compare and append happen under one lock, so concurrent
//!   callers can never admit more than `max_calls` per window
//! - There is no global registry: every throttled action owns its own
//!   instance, keyed however the owner sees fit
//! - Timestamps are taken inside the lock so the deque stays sorted
//!
//! ## Example
//!
//! ```rust
//! use warden_monitor::create_rate_limiter;
//!
//! let limiter = create_rate_limiter(3, 1_000)?;
//! assert!(limiter.is_allowed());
//! assert_eq!(limiter.remaining_calls(), 2);
//! # Ok::<(), warden_monitor::MonitorError>(())
//! ```

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::{MonitorError, Result};

/// Serializable limit for one throttled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Calls admitted per window.
    pub max_calls: usize,
    /// Window length in milliseconds.
    pub window_ms: u64,
}

impl LimitConfig {
    /// Reject zero limits.
    pub fn validate(&self) -> Result<()> {
        if self.max_calls == 0 {
            return Err(MonitorError::InvalidLimit { field: "max_calls" });
        }
        if self.window_ms == 0 {
            return Err(MonitorError::InvalidLimit { field: "window_ms" });
        }
        Ok(())
    }
}

/// Build a limiter on the system clock.
///
/// Zero `max_calls` or `window_ms` is rejected.
pub fn create_rate_limiter(max_calls: usize, window_ms: u64) -> Result<RateLimiter> {
    RateLimiter::new(max_calls, Duration::from_millis(window_ms))
}

/// Sliding-window call counter for a single throttled action.
///
/// `Send + Sync`; share it behind an `Arc` or a reference.
#[derive(Debug)]
pub struct RateLimiter<C: Clock = SystemClock> {
    max_calls: usize,
    window: Duration,
    clock: C,
    calls: Mutex<VecDeque<Instant>>,
}

impl RateLimiter<SystemClock> {
    /// Creates a limiter admitting `max_calls` per `window`.
    pub fn new(max_calls: usize, window: Duration) -> Result<Self> {
        Self::with_clock(max_calls, window, SystemClock)
    }

    /// Creates a limiter from a serialized limit.
    pub fn from_config(config: &LimitConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.max_calls, Duration::from_millis(config.window_ms))
    }
}

impl<C: Clock> RateLimiter<C> {
    /// Creates a limiter reading time from `clock`.
    pub fn with_clock(max_calls: usize, window: Duration, clock: C) -> Result<Self> {
        if max_calls == 0 {
            return Err(MonitorError::InvalidLimit { field: "max_calls" });
        }
        if window.is_zero() {
            return Err(MonitorError::InvalidLimit { field: "window" });
        }
        Ok(Self {
            max_calls,
            window,
            clock,
            calls: Mutex::new(VecDeque::with_capacity(max_calls)),
        })
    }

    /// Records a call and returns `true` if it fits in the current window.
    ///
    /// A denied call is not recorded.
    pub fn is_allowed(&self) -> bool {
        let mut calls = self.calls.lock();
        let now = self.clock.now();

        let expired = self.expired_prefix(&calls, now);
        calls.drain(..expired);

        if calls.len() >= self.max_calls {
            debug!(
                max_calls = self.max_calls,
                window = ?self.window,
                "rate limit reached, call denied"
            );
            return false;
        }

        calls.push_back(now);
        true
    }

    /// Calls still available in the current window. Does not modify state.
    pub fn remaining_calls(&self) -> usize {
        let calls = self.calls.lock();
        let now = self.clock.now();
        let active = calls.len() - self.expired_prefix(&calls, now);
        self.max_calls.saturating_sub(active)
    }

    /// Forget every recorded call.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }

    /// Calls admitted per window.
    pub fn max_calls(&self) -> usize {
        self.max_calls
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of leading timestamps older than `now - window`.
    fn expired_prefix(&self, calls: &VecDeque<Instant>, now: Instant) -> usize {
        calls.partition_point(|t| now.saturating_duration_since(*t) > self.window)
    }

    #[cfg(test)]
    fn recorded(&self) -> usize {
        self.calls.lock().len()
    }
}
