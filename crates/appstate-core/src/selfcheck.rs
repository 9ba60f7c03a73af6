//! # Environment Self-Checks
//!
//! Deterministic smoke checks a harness runs to confirm the test
//! environment itself behaves: integer arithmetic, sequence aggregation,
//! and string probing all produce known answers. A failing check means the
//! environment is broken, not the application under test.
//!
//! Randomness deliberately has no check here; the core stays deterministic
//! and bounded randomness lives in the wait crate's jitter module.

use serde::{Deserialize, Serialize};

// =============================================================================
// AGGREGATION HELPERS
// =============================================================================

/// Sum a sequence with saturating arithmetic.
#[must_use]
pub fn sum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, v| acc.saturating_add(*v))
}

/// Count the values strictly greater than a threshold.
#[must_use]
pub fn count_over(values: &[i64], threshold: i64) -> usize {
    values.iter().filter(|v| **v > threshold).count()
}

// =============================================================================
// CHECK KINDS
// =============================================================================

/// The deterministic checks the runner knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CheckKind {
    /// Integer identities (2 + 2 = 4).
    Arithmetic,
    /// Sum and filter over a fixed fixture sequence.
    Aggregation,
    /// Length and substring probes over a fixed fixture string.
    Strings,
}

impl CheckKind {
    /// All checks in execution order.
    pub const ALL: [CheckKind; 3] = [
        CheckKind::Arithmetic,
        CheckKind::Aggregation,
        CheckKind::Strings,
    ];

    /// Human-readable name for reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Arithmetic => "arithmetic",
            CheckKind::Aggregation => "aggregation",
            CheckKind::Strings => "strings",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// CHECK REPORT
// =============================================================================

/// Outcome of a single self-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Which check ran.
    pub kind: CheckKind,
    /// Whether every assertion inside the check held.
    pub passed: bool,
    /// One-line explanation of what was verified or what failed.
    pub detail: String,
}

impl CheckReport {
    fn pass(kind: CheckKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(kind: CheckKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            passed: false,
            detail: detail.into(),
        }
    }
}

// =============================================================================
// RUNNER
// =============================================================================

/// Fixture sequence shared by the aggregation check and its tests.
pub const FIXTURE_SEQUENCE: [i64; 5] = [1, 2, 3, 4, 5];

/// Fixture string shared by the strings check and its tests.
pub const FIXTURE_STRING: &str = "Hello World";

/// Runner for the deterministic environment self-checks.
pub struct SelfCheck;

impl SelfCheck {
    /// Run a single check.
    #[must_use]
    pub fn run(kind: CheckKind) -> CheckReport {
        match kind {
            CheckKind::Arithmetic => Self::arithmetic(),
            CheckKind::Aggregation => Self::aggregation(),
            CheckKind::Strings => Self::strings(),
        }
    }

    /// Run every check in order.
    #[must_use]
    pub fn run_all() -> Vec<CheckReport> {
        CheckKind::ALL.iter().map(|kind| Self::run(*kind)).collect()
    }

    /// True when every check in a run passed.
    #[must_use]
    pub fn all_passed(reports: &[CheckReport]) -> bool {
        reports.iter().all(|r| r.passed)
    }

    fn arithmetic() -> CheckReport {
        let result = 2i64.saturating_add(2);
        if result == 4 {
            CheckReport::pass(CheckKind::Arithmetic, "2 + 2 = 4")
        } else {
            CheckReport::fail(CheckKind::Arithmetic, format!("2 + 2 = {result}"))
        }
    }

    fn aggregation() -> CheckReport {
        let total = sum(&FIXTURE_SEQUENCE);
        let over = count_over(&FIXTURE_SEQUENCE, 3);
        if total == 15 && over == 2 {
            CheckReport::pass(CheckKind::Aggregation, "sum=15, 2 values over 3")
        } else {
            CheckReport::fail(
                CheckKind::Aggregation,
                format!("sum={total}, {over} values over 3"),
            )
        }
    }

    fn strings() -> CheckReport {
        let len = FIXTURE_STRING.len();
        let contains = FIXTURE_STRING.contains("World");
        if len == 11 && contains {
            CheckReport::pass(CheckKind::Strings, "length=11, contains `World`")
        } else {
            CheckReport::fail(
                CheckKind::Strings,
                format!("length={len}, contains `World`={contains}"),
            )
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
