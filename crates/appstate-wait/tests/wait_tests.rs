//! # Wait Primitive Tests
//!
//! Behavioral tests for the cancellable wait and the jitter source.
//!
//! Timing assertions check LOWER bounds only. An upper-bound assertion on
//! elapsed wall time fails on loaded CI machines; that anti-pattern is
//! exactly what this crate exists to retire.

use appstate_wait::{
    Stopwatch, WaitOutcome, bounded, cancellable, jitter_millis, measure, sleep_at_least,
};
use proptest::prelude::*;
use std::time::Duration;

// =============================================================================
// SLEEP LOWER BOUND
// =============================================================================

#[tokio::test]
async fn sleep_completes_no_earlier_than_requested() {
    let requested = Duration::from_millis(10);
    let watch = Stopwatch::start();

    sleep_at_least(requested).await;

    assert!(watch.elapsed() >= requested);
}

#[tokio::test]
async fn measure_reports_at_least_the_slept_duration() {
    let requested = Duration::from_millis(10);

    let ((), elapsed) = measure(sleep_at_least(requested)).await;

    assert!(elapsed >= requested);
}

// =============================================================================
// CANCELLABLE WAIT
// =============================================================================

#[tokio::test]
async fn uncancelled_wait_elapses() {
    let requested = Duration::from_millis(10);
    let (_handle, wait) = cancellable(requested);
    let watch = Stopwatch::start();

    let outcome = wait.wait().await;

    assert_eq!(outcome, WaitOutcome::Elapsed);
    assert!(watch.elapsed() >= requested);
}

#[tokio::test]
async fn cancel_resolves_a_pending_wait() {
    // Long enough that resolution before the deadline proves cancellation.
    let (handle, wait) = cancellable(Duration::from_secs(30));

    assert!(handle.cancel());
    assert_eq!(wait.wait().await, WaitOutcome::Cancelled);
}

#[tokio::test]
async fn cancel_from_another_task_resolves_the_wait() {
    let (handle, wait) = cancellable(Duration::from_secs(30));

    let canceller = tokio::spawn(async move {
        sleep_at_least(Duration::from_millis(5)).await;
        handle.cancel()
    });

    assert_eq!(wait.wait().await, WaitOutcome::Cancelled);
    assert!(canceller.await.expect("canceller task"));
}

#[tokio::test]
async fn dropped_handle_is_not_a_cancellation() {
    let requested = Duration::from_millis(10);
    let (handle, wait) = cancellable(requested);
    let watch = Stopwatch::start();

    drop(handle);

    assert_eq!(wait.wait().await, WaitOutcome::Elapsed);
    assert!(watch.elapsed() >= requested);
}

#[tokio::test]
async fn cancel_after_resolution_reports_nothing_to_cancel() {
    let (handle, wait) = cancellable(Duration::from_millis(5));

    assert_eq!(wait.wait().await, WaitOutcome::Elapsed);
    assert!(!handle.cancel());
}

// =============================================================================
// JITTER RANGE MEMBERSHIP
// =============================================================================

proptest! {
    /// Every draw lands inside the requested range, for any non-empty range.
    #[test]
    fn bounded_draw_respects_any_range(lo in 0u64..10_000, span in 0u64..10_000) {
        let hi = lo + span;
        let draw = bounded(lo..=hi);
        prop_assert!((lo..=hi).contains(&draw));
    }

    /// Jitter durations are non-zero and never exceed the cap.
    #[test]
    fn jitter_is_non_zero_and_capped(max in 1u64..10_000) {
        let jitter = jitter_millis(max);
        prop_assert!(jitter >= Duration::from_millis(1));
        prop_assert!(jitter <= Duration::from_millis(max));
    }
}

#[test]
fn range_check_draws_are_never_compared_for_equality() {
    // The demo this crate descends from logged when two draws collided.
    // Range membership is the only property a draw carries; assert it per
    // draw and nothing across draws.
    for _ in 0..10 {
        let draw = bounded(1..=100);
        assert!((1..=100).contains(&draw));
    }
}
