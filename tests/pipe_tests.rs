#![cfg(feature = "compose")]
//! Unit tests for the pipe! macro and the small combinators.

use seqtools::compose::{constant, identity};
use seqtools::pipe;

// =============================================================================
// Basic pipe! tests
// =============================================================================

#[test]
fn test_pipe_single_function_is_unchanged() {
    fn double(value: i32) -> i32 {
        value * 2
    }
    let piped = pipe!(double);
    assert_eq!(piped(5), 10);
}

#[test]
fn test_pipe_single_function_keeps_arity() {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }
    let piped = pipe!(add);
    assert_eq!(piped(2, 3), 5);
}

#[test]
fn test_pipe_two_functions() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }

    // add_one(double(5)) = 11
    let piped = pipe!(double, add_one);
    assert_eq!(piped(5), 11);
}

#[test]
fn test_pipe_many_functions() {
    let add_one = |value: i32| value + 1;
    let double = |value: i32| value * 2;
    let square = |value: i32| value * value;

    // 2 -> 3 -> 6 -> 36
    let piped = pipe!(add_one, double, square);
    assert_eq!(piped(2), 36);
}

// =============================================================================
// Type conversion through the pipeline
// =============================================================================

#[test]
fn test_pipe_with_type_conversion() {
    fn to_text(value: i32) -> String {
        value.to_string()
    }
    fn length(text: String) -> usize {
        text.len()
    }

    let piped = pipe!(to_text, length);
    assert_eq!(piped(12345), 5);
}

// =============================================================================
// Identity laws
// =============================================================================

#[test]
fn test_identity_is_a_unit_for_pipe() {
    fn double(value: i32) -> i32 {
        value * 2
    }

    let left = pipe!(identity, double);
    let right = pipe!(double, identity);

    assert_eq!(left(21), double(21));
    assert_eq!(right(21), double(21));
}

#[test]
fn test_constant_swallows_pipeline_input() {
    let piped = pipe!(|value: i32| value + 1, constant("fixed"));
    assert_eq!(piped(1), "fixed");
    assert_eq!(piped(100), "fixed");
}
