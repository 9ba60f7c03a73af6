//! # appstate-core
//!
//! The deterministic core of appstate - THE LOGIC.
//!
//! This crate holds everything about an application run that can be
//! specified without a host platform in the room:
//! - the lifecycle flag holder ([`LifecycleState`])
//! - the host-context capability seam and its relaxed fake
//!   ([`ContextProvider`], [`FakeContext`], [`probe`])
//! - the deterministic environment self-checks ([`SelfCheck`])
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: NO async, NO network dependencies
//! - Deterministic: integer arithmetic only, no randomness
//! - The host platform is reached only through the `ContextProvider` seam;
//!   the asynchronous wait primitive lives in the sibling `appstate-wait`
//!   crate so this one stays runtime-free

// =============================================================================
// MODULES
// =============================================================================

pub mod context;
pub mod lifecycle;
pub mod selfcheck;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use context::{
    ContextError, ContextProvider, ContextReport, FakeContext, probe, probe_expecting,
};
pub use lifecycle::LifecycleState;
pub use selfcheck::{CheckKind, CheckReport, SelfCheck, count_over, sum};
