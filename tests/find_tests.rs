#![cfg(feature = "sequence")]
//! Scenario tests for count/find/find_last.
//!
//! `find_last` has two strategies: a forward scan for one-directional
//! sources and a backward scan (`find_last_back`) for sources that can
//! be walked from the end. Both must agree.

use rstest::rstest;
use seqtools::compose::constant;
use seqtools::sequence::predicates::is_odd;
use seqtools::sequence::{count, find, find_last, find_last_back};

// =============================================================================
// count
// =============================================================================

#[rstest]
fn count_matching_elements() {
    assert_eq!(count(0..10, is_odd), 5);
}

#[rstest]
fn count_with_always_true_counts_everything() {
    assert_eq!(count(0..10, constant(true)), 10);
}

#[rstest]
fn count_empty_input() {
    assert_eq!(count(std::iter::empty::<i64>(), constant(true)), 0);
}

// =============================================================================
// find
// =============================================================================

#[rstest]
fn find_returns_first_match() {
    assert_eq!(find(0..11, is_odd), Some(1));
}

#[rstest]
fn find_without_match_returns_none() {
    assert_eq!(find(0..11, |value: &i64| *value < 0), None);
}

// =============================================================================
// find_last
// =============================================================================

// The last odd value is 9 whether the range has 10 or 11 elements;
// the parity of the length must not matter.
#[rstest]
#[case(10)]
#[case(11)]
fn find_last_forward_scan(#[case] stop: i64) {
    assert_eq!(find_last(0..stop, is_odd), Some(9));
}

#[rstest]
#[case(10)]
#[case(11)]
fn find_last_backward_scan(#[case] stop: i64) {
    let values: Vec<i64> = (0..stop).collect();
    assert_eq!(find_last_back(values, is_odd), Some(9));
}

#[rstest]
fn find_last_without_match_returns_none() {
    assert_eq!(find_last(0..11, |value: &i64| *value < 0), None);
    assert_eq!(
        find_last_back((0..11).collect::<Vec<i64>>(), |value| *value < 0),
        None
    );
}

#[rstest]
fn strategies_agree_on_every_prefix() {
    for stop in 0..20i64 {
        let forward = find_last(0..stop, |value| value % 3 == 0);
        let backward = find_last_back(0..stop, |value| value % 3 == 0);
        assert_eq!(forward, backward, "stop = {stop}");
    }
}
