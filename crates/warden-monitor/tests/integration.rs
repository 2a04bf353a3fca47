//! # Integration Tests
//!
//! End-to-end tests for the rate limiter under concurrent and long-running
//! use.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use warden_monitor::{create_rate_limiter, LimitConfig, ManualClock, RateLimiter};

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_callers_never_exceed_limit() {
    // Threat: many request handlers race on the same limiter
    let clock = ManualClock::new();
    let limiter = RateLimiter::with_clock(25, Duration::from_secs(60), clock).unwrap();
    let admitted = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    if limiter.is_allowed() {
                        admitted.fetch_add(1, Ordering::SeqCst);
                    }
                }
            });
        }
    });

    assert_eq!(admitted.load(Ordering::SeqCst), 25);
    assert_eq!(limiter.remaining_calls(), 0);
}

#[test]
fn test_shared_behind_arc() {
    let limiter = Arc::new(create_rate_limiter(4, 60_000).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let limiter = Arc::clone(&limiter);
            thread::spawn(move || limiter.is_allowed())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert!(!limiter.is_allowed());
}

// ============================================================================
// Independence and windows
// ============================================================================

#[test]
fn test_instances_are_independent() {
    let clock = ManualClock::new();
    let orders = RateLimiter::with_clock(1, Duration::from_secs(1), clock.clone()).unwrap();
    let reviews = RateLimiter::with_clock(1, Duration::from_secs(1), clock).unwrap();

    assert!(orders.is_allowed());
    assert!(!orders.is_allowed());
    assert!(reviews.is_allowed());
}

#[test]
fn test_steady_rate_is_sustainable() {
    // One call every 250ms against 4 per second never trips the limit
    let clock = ManualClock::new();
    let limiter = RateLimiter::with_clock(4, Duration::from_millis(1000), clock.clone()).unwrap();

    for _ in 0..40 {
        assert!(limiter.is_allowed());
        clock.advance(Duration::from_millis(251));
    }
}

#[test]
fn test_burst_then_recovery() {
    let clock = ManualClock::new();
    let limiter = RateLimiter::with_clock(3, Duration::from_millis(1000), clock.clone()).unwrap();

    let burst: Vec<bool> = (0..5).map(|_| limiter.is_allowed()).collect();
    assert_eq!(burst, [true, true, true, false, false]);
    assert_eq!(limiter.remaining_calls(), 0);

    clock.advance(Duration::from_millis(1001));
    assert_eq!(limiter.remaining_calls(), 3);
    assert!(limiter.is_allowed());
    assert_eq!(limiter.remaining_calls(), 2);
}

#[test]
fn test_limit_config_round_trip_from_json() {
    let config: LimitConfig =
        serde_json::from_str(r#"{"max_calls": 5, "window_ms": 30000}"#).unwrap();
    let limiter = RateLimiter::from_config(&config).unwrap();
    assert_eq!(limiter.max_calls(), 5);
    assert_eq!(limiter.window(), Duration::from_secs(30));
}
