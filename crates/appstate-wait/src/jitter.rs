//! # Bounded Jitter
//!
//! Bounded randomness for staggering waits. The only contract a draw
//! carries is range membership; two independent draws have no promised
//! relationship, so nothing here (and no caller) should compare draws for
//! equality. That comparison is the classic flaky test.

use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;

// =============================================================================
// DRAWS
// =============================================================================

/// Draw a value within an inclusive range.
///
/// An inverted range (`start > end`) is clamped to the singleton `start`,
/// so a draw always succeeds and always lands in `start..=max(start, end)`.
#[must_use]
pub fn bounded(range: RangeInclusive<u64>) -> u64 {
    let lo = *range.start();
    let hi = (*range.end()).max(lo);
    rand::thread_rng().gen_range(lo..=hi)
}

/// A jitter duration of 1 up to `max_millis` milliseconds.
///
/// `max_millis` of zero is treated as 1, so the result is always a
/// non-zero stagger.
#[must_use]
pub fn jitter_millis(max_millis: u64) -> Duration {
    Duration::from_millis(bounded(1..=max_millis.max(1)))
}

// =============================================================================
// TESTS
// =============================================================================
