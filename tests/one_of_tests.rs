//! Integration tests for `OneOf<L, R>`.
//!
//! OneOf holds exactly one of two independently typed values:
//! - `Left(L)`
//! - `Right(R)`

use std::cell::Cell;
use std::sync::Arc;

use faultline::prelude::*;
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn one_of_left_is_left() {
    let value: OneOf<&str, i32> = OneOf::Left("test");
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn one_of_right_is_right() {
    let value: OneOf<&str, i32> = OneOf::Right(123);
    assert!(value.is_right());
    assert!(!value.is_left());
}

#[rstest]
fn one_of_never_vacant() {
    let value: OneOf<i32, i32> = OneOf::Left(0);
    assert!(!value.is_vacant());
    assert!(Maybe::some(value).is_some());
}

// =============================================================================
// Matching
// =============================================================================

#[rstest]
#[case(OneOf::Left("test"), "text test")]
#[case(OneOf::Right(123), "number 123")]
fn one_of_match_with(#[case] value: OneOf<&str, i32>, #[case] expected: &str) {
    let rendered = value.match_with(|text| format!("text {text}"), |number| format!("number {number}"));
    assert_eq!(rendered, expected);
}

#[rstest]
fn one_of_match_with_runs_only_selected_branch() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let value: OneOf<&str, i32> = OneOf::Right(1);
    value.match_with(
        |_| left_calls.set(left_calls.get() + 1),
        |_| right_calls.set(right_calls.get() + 1),
    );
    assert_eq!(left_calls.get(), 0);
    assert_eq!(right_calls.get(), 1);
}

// =============================================================================
// Value Extraction and Casting
// =============================================================================

#[rstest]
fn one_of_projections() {
    let left: OneOf<&str, i32> = OneOf::Left("test");
    assert_eq!(left.left_ref(), Some(&"test"));
    assert_eq!(left.right_ref(), None);
    assert_eq!(left.left_iter().collect::<Vec<_>>(), vec!["test"]);
    assert_eq!(left.right_iter().count(), 0);
}

#[rstest]
fn one_of_try_casts() {
    let left: OneOf<&str, i32> = OneOf::Left("test");
    assert_eq!(left.try_left(), Ok("test"));

    let error = left.try_right().unwrap_err();
    assert_eq!(error.state, "OneOf::Left");
    assert_eq!(error.target, "i32");

    let right: OneOf<&str, i32> = OneOf::Right(123);
    assert_eq!(right.try_right(), Ok(123));
    assert_eq!(right.try_left().unwrap_err().state, "OneOf::Right");
}

#[rstest]
fn one_of_map_and_swap() {
    let left: OneOf<i32, String> = OneOf::Left(2);
    assert_eq!(left.clone().map_left(|value| value * 3), OneOf::Left(6));
    assert_eq!(left.clone().map_right(|text| text.len()), OneOf::Left(2));
    assert_eq!(left.swap(), OneOf::Right(2));
}

// =============================================================================
// Sequences
// =============================================================================

#[rstest]
fn one_of_sequence_projections_preserve_order() {
    let values: Vec<OneOf<&str, i32>> = vec![
        OneOf::Left("a"),
        OneOf::Right(1),
        OneOf::Left("b"),
        OneOf::Right(2),
    ];
    assert_eq!(values.clone().into_iter().lefts().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(values.into_iter().rights().collect::<Vec<_>>(), vec![1, 2]);
}

// =============================================================================
// Identity and Conversions
// =============================================================================

#[rstest]
fn one_of_try_casts_return_the_stored_reference() {
    let shared = Arc::new(String::from("payload"));

    let left: OneOf<Arc<String>, i32> = OneOf::Left(Arc::clone(&shared));
    assert!(Arc::ptr_eq(&left.try_left().unwrap(), &shared));

    let right: OneOf<i32, Arc<String>> = OneOf::Right(Arc::clone(&shared));
    assert!(Arc::ptr_eq(&right.try_right().unwrap(), &shared));
}

#[rstest]
fn one_of_from_result_uses_outcome_sides() {
    let ok: Result<i32, String> = Ok(1);
    assert_eq!(OneOf::from(ok), OneOf::Left(1));

    let err: Result<i32, String> = Err("error".to_string());
    assert_eq!(OneOf::from(err), OneOf::Right("error".to_string()));
}
