//! Integration tests for compose! and the composition helpers.

use rstest::rstest;
use seqpipe::compose::{compose_all, constant, flip, identity, negate};
use seqpipe::ender::{find_index, to_vec};
use seqpipe::operator::{filter, map, segmentize, skip};
use seqpipe::{compose, pipe};

// =============================================================================
// compose! ordering
// =============================================================================

#[rstest]
fn test_compose_empty_is_identity() {
    let composed = compose!();
    assert_eq!(composed("same"), "same");
}

#[rstest]
fn test_compose_runs_first_argument_first() {
    let append_a = |text: String| text + "a";
    let append_b = |text: String| text + "b";

    let composed = compose!(append_a, append_b);
    assert_eq!(composed(String::from(">")), ">ab");
}

#[rstest]
fn test_compose_operators_into_reusable_pipeline() {
    let runs_after_header = compose!(skip(1), segmentize(), to_vec());

    assert_eq!(
        runs_after_header(vec!['#', 'a', 'a', 'b', 'a']),
        vec![vec!['a', 'a'], vec!['b'], vec!['a']],
    );
    assert_eq!(runs_after_header(vec!['#']), Vec::<Vec<char>>::new());
}

#[rstest]
fn test_compose_matches_pipe() {
    let composed = compose!(
        filter(|value: &i32, _| *value > 0),
        map(|value: i32, _| value * 10),
        to_vec(),
    );
    let piped = pipe!(
        vec![-2, 1, 0, 3],
        filter(|value: &i32, _| *value > 0),
        map(|value: i32, _| value * 10),
        to_vec(),
    );
    assert_eq!(composed(vec![-2, 1, 0, 3]), piped);
}

#[rstest]
fn test_compose_all_over_runtime_list() {
    fn increment(x: u32) -> u32 {
        x + 1
    }
    fn triple(x: u32) -> u32 {
        x * 3
    }
    fn subtract_two(x: u32) -> u32 {
        x - 2
    }

    let steps: Vec<fn(u32) -> u32> = vec![increment, triple, subtract_two];
    let composed = compose_all(steps);
    assert_eq!(composed(1), 4);
}

#[rstest]
fn test_compose_all_empty_is_identity() {
    let composed = compose_all(Vec::<fn(u8) -> u8>::new());
    assert_eq!(composed(9), 9);
}

// =============================================================================
// Helpers
// =============================================================================

#[rstest]
#[case(0)]
#[case(-17)]
fn test_identity_returns_argument(#[case] value: i64) {
    assert_eq!(identity(value), value);
}

#[rstest]
fn test_constant_ignores_input() {
    let always_seven = constant(7);
    assert_eq!(always_seven("anything"), 7);
    assert_eq!(always_seven("else"), 7);
}

#[rstest]
fn test_flip_swaps_arguments() {
    let subtract = |left: i32, right: i32| left - right;
    assert_eq!(flip(subtract)(1, 10), 9);
}

#[rstest]
fn test_negate_inverts_predicate() {
    let is_digit = |character: &char, _: usize| character.is_ascii_digit();
    let first_letter = find_index(negate(is_digit));
    assert_eq!(first_letter("42x1".chars()), Some(2));
}
