//! Unit tests for core type serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use appstate_core::{CheckKind, CheckReport, ContextReport, FakeContext, LifecycleState, probe};

// =============================================================================
// LIFECYCLE STATE
// =============================================================================

#[test]
fn lifecycle_state_round_trips() {
    let mut state = LifecycleState::new();
    state.start();
    state.set_dev_mode(true);

    let json = serde_json::to_string(&state).unwrap();
    let restored: LifecycleState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    assert!(restored.is_started());
    assert!(restored.is_dev_mode());
}

#[test]
fn fresh_lifecycle_state_serializes_both_flags_off() {
    let json = serde_json::to_string(&LifecycleState::new()).unwrap();
    assert_eq!(json, r#"{"started":false,"dev_mode":false}"#);
}

// =============================================================================
// CONTEXT REPORT
// =============================================================================

#[test]
fn context_report_round_trips() {
    let fake = FakeContext::with_package_name("com.zettle.payments.android.kotlin_example");
    let report = probe(&fake).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let restored: ContextReport = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, report);
    assert!(restored.package_name.contains("kotlin_example"));
}

#[test]
fn context_report_deserializes_from_plain_json() {
    let json = r#"{"package_name":"com.example.app","package_manager":true,"resources":true}"#;
    let report: ContextReport = serde_json::from_str(json).unwrap();

    assert_eq!(report.package_name, "com.example.app");
    assert!(report.package_manager);
    assert!(report.resources);
}

// =============================================================================
// SELF-CHECK REPORTS
// =============================================================================

#[test]
fn check_report_round_trips() {
    let report = CheckReport {
        kind: CheckKind::Aggregation,
        passed: true,
        detail: "sum=15, 2 values over 3".to_string(),
    };

    let json = serde_json::to_string(&report).unwrap();
    let restored: CheckReport = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, report);
}

#[test]
fn check_kind_serializes_as_variant_name() {
    let json = serde_json::to_string(&CheckKind::Strings).unwrap();
    assert_eq!(json, r#""Strings""#);

    let kind: CheckKind = serde_json::from_str(r#""Arithmetic""#).unwrap();
    assert_eq!(kind, CheckKind::Arithmetic);
}
