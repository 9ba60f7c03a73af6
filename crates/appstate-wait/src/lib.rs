//! # appstate-wait
//!
//! The asynchronous side of appstate: an explicit, cancellable wait
//! primitive replacing an implicit suspending delay, a monotonic stopwatch
//! for lower-bound timing assertions, and a bounded jitter source.
//!
//! This is the only workspace member that touches a runtime. The contract
//! of every wait is a lower bound only: "completes no earlier than the
//! requested duration". Upper bounds are not promised and must not be
//! asserted.

// =============================================================================
// MODULES
// =============================================================================

pub mod jitter;
pub mod timer;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use jitter::{bounded, jitter_millis};
pub use timer::{
    CancellableWait, Stopwatch, WaitHandle, WaitOutcome, cancellable, measure, sleep_at_least,
};
