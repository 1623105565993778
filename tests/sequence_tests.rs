//! Integration tests for the sequence combinators.
//!
//! Two policies are exercised side by side:
//! - accumulate: every element is evaluated and all failures are kept
//! - first match: `coalesce` stops at the first hit

use std::cell::Cell;

use faultline::prelude::*;
use rstest::rstest;

fn fault(code: &str) -> Fault {
    Fault::new(code, "title", format!("{code} failed"))
}

fn batch() -> Vec<Outcome<i32>> {
    vec![
        Outcome::success(1),
        Outcome::failure(fault("E2")),
        Outcome::success(3),
        Outcome::failure(fault("E4")),
    ]
}

// =============================================================================
// Outcome Batches
// =============================================================================

#[rstest]
fn reduce_outcomes_aggregates_every_failure_in_order() {
    let projected = Cell::new(false);
    let reduced = batch().into_iter().reduce_outcomes(|values| {
        projected.set(true);
        values.len()
    });

    let aggregated = reduced.try_failure().unwrap();
    assert!(!projected.get());
    assert_eq!(aggregated.code(), "AggregateFault");
    assert_eq!(aggregated.faults(), &[fault("E2"), fault("E4")]);
    assert_eq!(aggregated.detail(), "[E2] title: E2 failed\n[E4] title: E4 failed");
}

#[rstest]
fn reduce_outcomes_projects_when_all_succeed() {
    let outcomes = vec![Outcome::success(1), Outcome::success(2), Outcome::success(3)];
    let total = outcomes.into_iter().reduce_outcomes(|values| values.into_iter().sum::<i32>());
    assert_eq!(total.try_success(), Ok(6));
}

#[rstest]
fn reduce_outcomes_single_failure_still_aggregates() {
    let outcomes: Vec<Outcome<i32>> = vec![Outcome::success(1), Outcome::failure(fault("E2"))];
    let aggregated = outcomes
        .into_iter()
        .reduce_outcomes(|values| values)
        .try_failure()
        .unwrap();
    assert!(aggregated.is_aggregate());
    assert_eq!(aggregated.faults(), &[fault("E2")]);
}

#[rstest]
fn flatten_outcomes_concatenates_in_order() {
    let outcomes = vec![
        Outcome::success(vec![1]),
        Outcome::success(vec![2, 3]),
        Outcome::success(Vec::new()),
        Outcome::success(vec![4, 5, 6]),
    ];
    assert_eq!(
        outcomes.into_iter().flatten_outcomes().try_success(),
        Ok(vec![1, 2, 3, 4, 5, 6])
    );
}

#[rstest]
fn reduce_flattened_projects_concatenation() {
    let outcomes = vec![Outcome::success(vec![1, 2]), Outcome::success(vec![3])];
    let joined = outcomes.into_iter().reduce_flattened(|values: Vec<i32>| {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    });
    assert_eq!(joined.try_success(), Ok("1,2,3".to_string()));
}

#[rstest]
fn successes_and_failures_partition() {
    assert_eq!(batch().into_iter().successes().collect::<Vec<_>>(), vec![1, 3]);
    let codes: Vec<String> = batch()
        .into_iter()
        .failures()
        .map(|fault| fault.code().to_string())
        .collect();
    assert_eq!(codes, vec!["E2", "E4"]);
}

// =============================================================================
// Maybe Accumulation
// =============================================================================

#[rstest]
fn and_collect_evaluates_every_stage() {
    let calls = Cell::new(0);
    let counter = &calls;
    let stage = move |result: Maybe<Fault>| {
        move || {
            counter.set(counter.get() + 1);
            result
        }
    };

    let results: Vec<Maybe<Fault>> = Maybe::some(fault("E1"))
        .and_collect(stage(Maybe::none()))
        .and_collect(stage(Maybe::some(fault("E3"))))
        .and_collect_value(Maybe::none())
        .collect();

    assert_eq!(calls.get(), 2);
    assert_eq!(
        results,
        vec![
            Maybe::some(fault("E1")),
            Maybe::none(),
            Maybe::some(fault("E3")),
            Maybe::none(),
        ]
    );
}

#[rstest]
fn reduce_somes_projects_present_values() {
    let maybes = vec![Maybe::some(2), Maybe::none(), Maybe::some(5)];
    assert_eq!(maybes.into_iter().reduce_somes(|values| values.iter().product::<i32>()), Maybe::some(10));
}

#[rstest]
fn somes_collects_faults_from_checks() {
    let faults: Vec<Fault> = vec![Maybe::none(), Maybe::some(fault("E2")), Maybe::none()]
        .into_iter()
        .somes()
        .collect();
    assert_eq!(faults, vec![fault("E2")]);
}

// =============================================================================
// First Match
// =============================================================================

#[rstest]
#[case(vec![0, 1, 2], Maybe::some(1))]
#[case(vec![0, 0], Maybe::some(99))]
#[case(Vec::new(), Maybe::some(99))]
fn coalesce_returns_first_match_or_fallback(#[case] items: Vec<u32>, #[case] expected: Maybe<u32>) {
    let result = items.into_iter().coalesce(Maybe::some, Maybe::some(99));
    assert_eq!(result, expected);
}
