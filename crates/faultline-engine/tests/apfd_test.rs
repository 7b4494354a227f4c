//! Tests for the APFD calculator.

use faultline_core::errors::ApfdError;
use faultline_core::types::{Outcome, OutcomeMap, TestId};
use faultline_engine::apfd;

fn order(ids: &[&str]) -> Vec<TestId> {
    ids.iter().map(|s| TestId::from(*s)).collect()
}

fn failing(ids: &[&str]) -> OutcomeMap {
    ids.iter().map(|s| (TestId::from(*s), Outcome::Failed)).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn test_formula_faults_at_two_and_four() {
    let order = order(&["t1", "t2", "t3", "t4", "t5"]);
    let report = apfd::compute(&order, &failing(&["t2", "t4"])).unwrap();

    assert!(close(report.apfd, 0.5));
    assert_eq!(report.test_count, 5);
    assert_eq!(report.fault_count, 2);
    assert_eq!(report.fault_positions, vec![2, 4]);
    assert_eq!(report.first_fault_position, Some(2));
    assert_eq!(report.mean_fault_position, Some(3.0));
    assert!(close(report.optimal_apfd, 0.8));
    assert!(close(report.random_apfd, 0.6));
}

#[test]
fn test_faults_first_equals_optimal() {
    let order = order(&["t1", "t2", "t3", "t4", "t5"]);
    let report = apfd::compute(&order, &failing(&["t2", "t1"])).unwrap();
    assert!(close(report.apfd, 0.8));
    assert!(close(report.apfd, report.optimal_apfd));
}

#[test]
fn test_zero_faults_is_exactly_one() {
    let order = order(&["t1", "t2", "t3", "t4"]);
    let mut outcomes = OutcomeMap::new();
    outcomes.insert(TestId::from("t1"), Outcome::Passed);
    outcomes.insert(TestId::from("t3"), Outcome::Passed);

    let report = apfd::compute(&order, &outcomes).unwrap();
    assert_eq!(report.apfd, 1.0);
    assert_eq!(report.fault_count, 0);
    assert_eq!(report.first_fault_position, None);
    assert_eq!(report.mean_fault_position, None);
    assert!(report.fault_positions.is_empty());
    assert_eq!(report.optimal_apfd, 1.0);
    assert!(close(report.random_apfd, 0.5 + 1.0 / 8.0));
}

#[test]
fn test_empty_order_is_an_error() {
    let err = apfd::compute(&[], &OutcomeMap::new()).unwrap_err();
    assert!(matches!(err, ApfdError::EmptyOrder));
}

#[test]
fn test_duplicate_identifier_rejected() {
    let err = apfd::compute(&order(&["t1", "t2", "t1"]), &OutcomeMap::new()).unwrap_err();
    assert!(matches!(err, ApfdError::DuplicateIdentifier { ref id } if id == "t1"));
}

#[test]
fn test_fault_outside_order_rejected() {
    let err = apfd::compute(&order(&["t1", "t2"]), &failing(&["t9"])).unwrap_err();
    assert!(matches!(err, ApfdError::FaultNotInOrder { ref id } if id == "t9"));
}

#[test]
fn test_single_test_single_fault() {
    let report = apfd::compute(&order(&["only"]), &failing(&["only"])).unwrap();
    assert!(close(report.apfd, 0.5));
    assert!(close(report.random_apfd, 1.0));
}

#[test]
fn test_report_serializes() {
    let report = apfd::compute(&order(&["a", "b"]), &failing(&["b"])).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["fault_positions"], serde_json::json!([2]));
    assert_eq!(json["first_fault_position"], serde_json::json!(2));
}
