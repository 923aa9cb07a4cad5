//! Integration tests for water tracking

mod common;

use moodflow_core::CoreError;

#[test]
fn test_add_then_delete_recomputes_total() {
    let app = common::TestApp::new();
    let water = app.state.water();

    water.add_record(500).unwrap();
    let summary = water.summary().unwrap();
    assert_eq!(summary.consumed_ml, 500);
    assert!((summary.fraction - 0.25).abs() < 1e-9);
    assert_eq!(summary.intake_text, "500/2000 ml");

    water.delete_record(0).unwrap();
    assert_eq!(water.state().unwrap().consumed_ml, 0);
}

#[test]
fn test_goal_change_clears_records() {
    let app = common::TestApp::new();
    let water = app.state.water();
    water.add_record(250).unwrap();
    water.add_record(750).unwrap();

    water.set_goal(3000).unwrap();
    let state = water.state().unwrap();
    assert_eq!(state.daily_goal_ml, 3000);
    assert_eq!(state.consumed_ml, 0);
    assert!(state.records.is_empty());
}

#[test]
fn test_validation_errors_leave_state() {
    let app = common::TestApp::new();
    let water = app.state.water();
    water.add_record(300).unwrap();

    assert!(matches!(water.add_record(-5), Err(CoreError::Validation(_))));
    assert!(matches!(water.set_goal(-1), Err(CoreError::Validation(_))));
    let state = water.state().unwrap();
    assert_eq!(state.consumed_ml, 300);
    assert_eq!(state.daily_goal_ml, 2000);
}

#[test]
fn test_progress_not_clamped() {
    let app = common::TestApp::new();
    let water = app.state.water();
    water.set_goal(500).unwrap();
    water.add_record(750).unwrap();
    assert!((water.progress().unwrap() - 1.5).abs() < 1e-9);
}
