//! # Lifecycle State
//!
//! The application lifecycle flag holder.
//!
//! Two independent boolean flags, each a two-state machine:
//! - `started`: `false` at construction, transitions to `true` exactly once
//!   via [`LifecycleState::start`] and stays there (terminal).
//! - `dev_mode`: `false` at construction, freely toggled via
//!   [`LifecycleState::set_dev_mode`] with last-write-wins semantics.
//!
//! All operations are total functions over in-memory booleans; nothing here
//! can fail and nothing holds an external resource, so there is no teardown.

use serde::{Deserialize, Serialize};

// =============================================================================
// LIFECYCLE STATE
// =============================================================================

/// Application lifecycle flags.
///
/// A freshly constructed instance reports `is_started() == false` and
/// `is_dev_mode() == false`. The instance is intended for single-threaded,
/// synchronous access; wrap it in a lock if a harness ever needs sharing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleState {
    /// Whether the application has been started. Terminal once set.
    started: bool,
    /// Whether development-time behavior is enabled.
    dev_mode: bool,
}

impl LifecycleState {
    /// Create a new state with both flags off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started: false,
            dev_mode: false,
        }
    }

    /// Current start flag. No side effects.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Current dev-mode flag. No side effects.
    #[must_use]
    pub const fn is_dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Mark the application as started.
    ///
    /// Idempotent: returns `true` only for the call that performed the
    /// transition, `false` for every call after it.
    pub const fn start(&mut self) -> bool {
        let transitioned = !self.started;
        self.started = true;
        transitioned
    }

    /// Set the dev-mode flag. Last write wins; no history is kept.
    pub const fn set_dev_mode(&mut self, enabled: bool) {
        self.dev_mode = enabled;
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "started={} dev_mode={}",
            self.started, self.dev_mode
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
