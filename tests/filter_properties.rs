//! Property-based tests for filter correctness.
//!
//! These tests verify the filter contract over arbitrary tables: a record
//! survives if and only if its grade satisfies the predicate, survivors
//! keep their relative order, and refiltering changes nothing.

mod common;

use proptest::prelude::*;

use gradebook::{GradeFilter, GradeTable};

use common::{SAMPLE_THRESHOLD, sample_table};

fn table_strategy() -> impl Strategy<Value = GradeTable> {
    proptest::collection::hash_set("[A-Z][a-z]{1,8}", 0..16)
        .prop_flat_map(|names| {
            let names: Vec<String> = names.into_iter().collect();
            let len = names.len();
            (
                Just(names),
                proptest::collection::vec(0u32..=150, len..=len),
            )
        })
        .prop_map(|(names, grades)| {
            GradeTable::from_records(names.into_iter().zip(grades)).unwrap()
        })
}

proptest! {
    #[test]
    fn membership_iff_above_threshold(table in table_strategy(), threshold in 0u32..=150) {
        let passing = GradeFilter::above(threshold).apply(&table);
        for record in table.iter() {
            prop_assert_eq!(passing.contains(&record.name), record.grade > threshold);
        }
        for record in passing.iter() {
            prop_assert_eq!(table.get(&record.name), Some(record.grade));
        }
    }

    #[test]
    fn survivor_order_is_preserved(table in table_strategy(), threshold in 0u32..=150) {
        let passing = GradeFilter::above(threshold).apply(&table);
        let expected: Vec<_> = table
            .iter()
            .filter(|record| record.grade > threshold)
            .cloned()
            .collect();
        let actual: Vec<_> = passing.iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn retained_count_matches_qualifying_entries(table in table_strategy(), threshold in 0u32..=150) {
        let (passing, report) = GradeFilter::above(threshold).apply_with_report(&table);
        let qualifying = table.iter().filter(|record| record.grade > threshold).count();
        prop_assert_eq!(passing.len(), qualifying);
        prop_assert_eq!(report.retained, qualifying);
        prop_assert_eq!(report.total(), table.len());
    }

    #[test]
    fn filtering_is_idempotent(table in table_strategy(), threshold in 0u32..=150) {
        let filter = GradeFilter::above(threshold);
        let once = filter.apply(&table);
        let twice = filter.apply(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn input_table_is_unchanged(table in table_strategy(), threshold in 0u32..=150) {
        let before = table.clone();
        let _ = GradeFilter::above(threshold).apply(&table);
        prop_assert_eq!(table, before);
    }
}

#[test]
fn filtering_sample_twice_matches_single_pass() {
    let filter = GradeFilter::above(SAMPLE_THRESHOLD);
    let once = filter.apply(&sample_table());
    assert_eq!(filter.apply(&once), once);
}
