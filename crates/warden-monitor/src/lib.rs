//! # Warden Monitor
//!
//! The stateful half of Warden: sliding-window rate limiting for repeated
//! client actions.
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`RateLimiter`] | Per-action sliding-window call counter |
//! | [`LimitConfig`] | Serializable `max_calls` / `window_ms` pair |
//! | [`Clock`] | Time source port ([`SystemClock`], [`ManualClock`]) |
//!
//! ## Quick Start
//!
//! ```rust
//! use warden_monitor::create_rate_limiter;
//!
//! // One limiter per throttled action, owned by the caller
//! let place_order = create_rate_limiter(3, 60_000)?;
//!
//! if place_order.is_allowed() {
//!     // ... submit the order ...
//! }
//! assert_eq!(place_order.remaining_calls(), 2);
//! # Ok::<(), warden_monitor::MonitorError>(())
//! ```
//!
//! ## Security Notes
//!
//! - Checks run BEFORE the guarded action
//! - A single instance is safe to share across threads
//! - Instances are independent; there is no process-wide state

mod clock;
mod error;
mod limiter;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{MonitorError, Result};
pub use limiter::{create_rate_limiter, LimitConfig, RateLimiter};
