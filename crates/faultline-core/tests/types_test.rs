//! Tests for identifiers, outcomes, and fault records.

use faultline_core::types::*;
use proptest::prelude::*;

#[test]
fn test_record_absent_ids_count_as_passed() {
    let mut outcomes = OutcomeMap::new();
    outcomes.insert(TestId::from("tc1"), Outcome::Failed);
    outcomes.insert(TestId::from("tc2"), Outcome::Passed);
    let record = FaultRecord::new(4, outcomes);

    assert_eq!(record.outcome_of("tc1"), Outcome::Failed);
    assert_eq!(record.outcome_of("tc2"), Outcome::Passed);
    assert_eq!(record.outcome_of("tc9"), Outcome::Passed);
    assert_eq!(record.failed_count(), 1);
}

#[test]
fn test_outcome_map_json_shape() {
    let outcomes: OutcomeMap = serde_json::from_str(r#"{"tc2": 0, "tc1": 1}"#).unwrap();
    assert_eq!(outcomes[&TestId::from("tc1")], Outcome::Failed);
    let json = serde_json::to_string(&outcomes).unwrap();
    assert_eq!(json, r#"{"tc1":1,"tc2":0}"#);
}

proptest! {
    #[test]
    fn canonical_ids_are_sorted_and_unique(
        raw in proptest::collection::vec("[a-z0-9]{1,6}", 0..40),
    ) {
        let ids = CanonicalIds::new(raw.iter().map(String::as_str));
        let slice = ids.as_slice();
        for w in slice.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(ids.index_of(id.as_str()), Some(i));
        }
        for r in &raw {
            prop_assert!(ids.contains(r));
        }
    }
}
