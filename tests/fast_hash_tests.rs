//! Tests for the fast hash feature flags.
//!
//! With `fxhash` or `ahash` enabled, the seen-sets behind `unique`, `union`,
//! `difference` and `intersection` switch hasher. Same-value equality must
//! not change with them: every `NaN` is one key, and `0.0` and `-0.0` are
//! two.

#![cfg(any(feature = "fxhash", feature = "ahash"))]

use rstest::rstest;
use seqpipe::ender::{count, to_vec};
use seqpipe::operator::{difference, intersection, union, unique, unique_by};
use seqpipe::pipe;

fn bits(values: Vec<f64>) -> Vec<u64> {
    values.into_iter().map(f64::to_bits).collect()
}

// =============================================================================
// Float keys
// =============================================================================

#[rstest]
fn test_unique_collapses_nan_and_keeps_signed_zeros() {
    let result = pipe!(vec![f64::NAN, 1.0, f64::NAN, -0.0, 0.0, -0.0], unique(), to_vec());
    assert_eq!(bits(result), bits(vec![f64::NAN, 1.0, -0.0, 0.0]));
}

#[rstest]
fn test_unique_collapses_nan_payloads() {
    let other_nan = f64::from_bits(f64::NAN.to_bits() | 1);
    let result = pipe!(vec![f64::NAN, other_nan, 2.0], unique(), count());
    assert_eq!(result, 2);
}

#[rstest]
fn test_union_keeps_signed_zeros_apart() {
    let with_extras = union(vec![vec![0.0, f64::NAN, 3.0]]);
    let result = pipe!(vec![f64::NAN, -0.0], with_extras, to_vec());
    assert_eq!(bits(result), bits(vec![f64::NAN, -0.0, 0.0, 3.0]));
}

#[rstest]
fn test_difference_removes_nan_but_not_negative_zero() {
    let without = difference(vec![f64::NAN, 0.0]);
    let result = pipe!(vec![f64::NAN, -0.0, 0.0, 2.0], without, to_vec());
    assert_eq!(bits(result), bits(vec![-0.0, 2.0]));
}

#[rstest]
fn test_intersection_matches_nan_and_exact_zero_sign() {
    let within = intersection(vec![f64::NAN, -0.0]);
    let result = pipe!(vec![0.0, f64::NAN, -0.0, 1.0], within, to_vec());
    assert_eq!(bits(result), bits(vec![f64::NAN, -0.0]));
}

// =============================================================================
// Determinism
// =============================================================================

#[rstest]
fn test_same_input_gives_same_output() {
    let words = vec!["delta", "alpha", "delta", "gamma", "alpha", "beta"];
    let first = pipe!(words.clone(), unique(), to_vec());
    let second = pipe!(words, unique(), to_vec());
    assert_eq!(first, vec!["delta", "alpha", "gamma", "beta"]);
    assert_eq!(first, second);
}

#[rstest]
#[case(100)]
#[case(10_000)]
fn test_many_distinct_keys(#[case] size: u64) {
    let result = pipe!((0..size).chain(0..size), unique(), count());
    assert_eq!(result, usize::try_from(size).unwrap());
}

#[rstest]
fn test_projected_composite_keys() {
    let readings: Vec<(&'static str, f32)> =
        vec![("a", f32::NAN), ("b", 0.0), ("a", f32::NAN), ("b", -0.0)];
    let result = pipe!(readings, unique_by(|reading: &(&'static str, f32)| *reading), count());
    assert_eq!(result, 3);
}
