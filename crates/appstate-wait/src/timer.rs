//! # Cancellable Wait
//!
//! The explicit asynchronous-wait abstraction: a timed suspension that
//! completes no earlier than the requested duration, and that can be
//! cancelled before completion with no state mutation anywhere else.
//!
//! Cancellation is a oneshot message from the [`WaitHandle`] to the pending
//! [`CancellableWait`]. Dropping the handle without cancelling is not a
//! cancellation; the wait then runs out the clock and reports
//! [`WaitOutcome::Elapsed`].

use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::time;
use tracing::trace;

// =============================================================================
// OUTCOME
// =============================================================================

/// How a cancellable wait resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The full duration passed.
    Elapsed,
    /// The handle cancelled the wait before the duration passed.
    Cancelled,
}

// =============================================================================
// PLAIN WAIT
// =============================================================================

/// Suspend the calling task for at least the requested duration.
///
/// The only contract is the lower bound: resumption happens no earlier than
/// `duration` after the call, with no observable side effect on shared
/// state. There is deliberately no upper-bound promise; asserting one is a
/// flaky-test trap on loaded machines.
pub async fn sleep_at_least(duration: Duration) {
    trace!(?duration, "sleep_at_least");
    time::sleep(duration).await;
}

/// Run a future and measure how long it took on the monotonic clock.
pub async fn measure<F: Future>(fut: F) -> (F::Output, Duration) {
    let watch = Stopwatch::start();
    let output = fut.await;
    (output, watch.elapsed())
}

// =============================================================================
// CANCELLABLE WAIT
// =============================================================================

/// Handle that can cancel a pending [`CancellableWait`].
#[derive(Debug)]
pub struct WaitHandle {
    cancel: Option<oneshot::Sender<()>>,
}

impl WaitHandle {
    /// Cancel the associated wait.
    ///
    /// Returns `true` if the cancellation reached a still-pending wait,
    /// `false` if the wait had already resolved.
    pub fn cancel(mut self) -> bool {
        match self.cancel.take() {
            Some(tx) => {
                let delivered = tx.send(()).is_ok();
                trace!(delivered, "wait cancel requested");
                delivered
            }
            None => false,
        }
    }
}

/// A pending timed wait that a [`WaitHandle`] may cancel.
#[derive(Debug)]
pub struct CancellableWait {
    duration: Duration,
    cancel: oneshot::Receiver<()>,
}

impl CancellableWait {
    /// The duration this wait was created with.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Await resolution.
    ///
    /// Resolves [`WaitOutcome::Elapsed`] no earlier than the requested
    /// duration, or [`WaitOutcome::Cancelled`] as soon as the handle
    /// cancels. A dropped handle is not a cancellation.
    pub async fn wait(self) -> WaitOutcome {
        let sleep = time::sleep(self.duration);
        tokio::pin!(sleep);
        let mut cancel = self.cancel;

        tokio::select! {
            () = &mut sleep => {
                trace!(duration = ?self.duration, "wait elapsed");
                return WaitOutcome::Elapsed;
            }
            result = &mut cancel => {
                if result.is_ok() {
                    trace!(duration = ?self.duration, "wait cancelled");
                    return WaitOutcome::Cancelled;
                }
                // Handle dropped without cancelling; run out the clock.
            }
        }

        sleep.await;
        trace!(duration = ?self.duration, "wait elapsed after handle drop");
        WaitOutcome::Elapsed
    }
}

/// Create a cancellable wait for the given duration.
#[must_use]
pub fn cancellable(duration: Duration) -> (WaitHandle, CancellableWait) {
    let (tx, rx) = oneshot::channel();
    (
        WaitHandle { cancel: Some(tx) },
        CancellableWait {
            duration,
            cancel: rx,
        },
    )
}

// =============================================================================
// STOPWATCH
// =============================================================================

/// Monotonic elapsed-time measurement.
///
/// Backed by [`Instant`], so it never goes backwards when the wall clock is
/// adjusted. Harness assertions against a stopwatch should check lower
/// bounds only.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    /// Start measuring now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since [`Stopwatch::start`].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

// =============================================================================
// TESTS
// =============================================================================
