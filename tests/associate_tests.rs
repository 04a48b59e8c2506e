#![cfg(feature = "sequence")]
//! Scenario tests for the association and grouping helpers.

use std::collections::HashMap;

use rstest::rstest;
use seqtools::sequence::predicates::is_even;
use seqtools::sequence::{associate, associate_by, associate_with, group_by, group_by_to};

// =============================================================================
// associate
// =============================================================================

#[rstest]
fn associate_builds_pairs_from_transform() {
    let map = associate(0..3, |value| (value, value * value));

    let expected: HashMap<i64, i64> = [(0, 0), (1, 1), (2, 4)].into_iter().collect();
    assert_eq!(map, expected);
}

#[rstest]
fn associate_later_duplicate_keys_win() {
    let map = associate([1, 2, 3, 4], |value| (value % 2, value));

    assert_eq!(map[&1], 3);
    assert_eq!(map[&0], 4);
}

#[rstest]
fn associate_by_indexes_elements_by_key() {
    let map = associate_by(["foo", "bar", "bazaar"], |word| word.len());

    assert_eq!(map[&3], "bar");
    assert_eq!(map[&6], "bazaar");
}

#[rstest]
fn associate_with_maps_elements_to_values() {
    let map = associate_with(1..4, |value| value * 10);

    let expected: HashMap<i64, i64> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
    assert_eq!(map, expected);
}

// =============================================================================
// group_by
// =============================================================================

#[rstest]
fn group_by_parity() {
    let groups = group_by(0..10, |value| if is_even(value) { "even" } else { "odd" });

    assert_eq!(groups.len(), 2);
    assert_eq!(groups["even"], vec![0, 2, 4, 6, 8]);
    assert_eq!(groups["odd"], vec![1, 3, 5, 7, 9]);
}

#[rstest]
fn group_by_empty_input_yields_empty_map() {
    let groups = group_by(std::iter::empty::<i64>(), |value| *value % 2);
    assert!(groups.is_empty());
}

#[rstest]
fn group_by_to_transforms_grouped_values() {
    let groups = group_by_to(
        0..10,
        |value| if is_even(value) { "even" } else { "odd" },
        |value| -value,
    );

    assert_eq!(groups["even"], vec![0, -2, -4, -6, -8]);
    assert_eq!(groups["odd"], vec![-1, -3, -5, -7, -9]);
}

#[rstest]
fn group_by_preserves_encounter_order_within_groups() {
    let groups = group_by(["apple", "avocado", "banana", "apricot"], |word| {
        word.as_bytes()[0]
    });

    assert_eq!(groups[&b'a'], vec!["apple", "avocado", "apricot"]);
    assert_eq!(groups[&b'b'], vec!["banana"]);
}
