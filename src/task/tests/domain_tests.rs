//! Unit tests for task normalisation rules.

use crate::task::domain::{Task, TaskStage};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(1.0, TaskStage::Completed)]
#[case(0.5, TaskStage::InProgress)]
#[case(0.0, TaskStage::NotStarted)]
#[case(1.7, TaskStage::Completed)]
#[case(-0.2, TaskStage::NotStarted)]
#[case(f64::NAN, TaskStage::NotStarted)]
#[case(f64::INFINITY, TaskStage::NotStarted)]
fn completion_is_clamped_before_classification(#[case] raw: f64, #[case] expected: TaskStage) {
    let task = Task::new("Essay").with_completion(raw);
    assert_eq!(task.stage(), expected);
    assert!((0.0..=1.0).contains(&task.completion()));
}

#[rstest]
fn negative_hours_estimate_is_zeroed() {
    let task = Task::new("Essay").with_hours_estimate(-3.0);
    assert!(task.hours_estimate().abs() < f64::EPSILON);
}

#[rstest]
fn task_serialises_with_client_field_names() {
    let task = Task::new("Essay")
        .with_status("Not started")
        .with_deadline("2025-05-01")
        .with_hours_estimate(4.0)
        .with_category("School")
        .with_completion(0.25);

    let value = serde_json::to_value(&task).expect("serialisable");

    assert_eq!(
        value,
        json!({
            "task": "Essay",
            "status": "Not started",
            "deadline": "2025-05-01",
            "hoursEstimate": 4.0,
            "category": "School",
            "completion": 0.25
        })
    );
}

#[rstest]
fn missing_deadline_serialises_as_null() {
    let value = serde_json::to_value(Task::new("Essay")).expect("serialisable");
    assert_eq!(value.get("deadline"), Some(&serde_json::Value::Null));
}
