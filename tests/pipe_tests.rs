//! Integration tests for the pipe! macro over operators and enders.

use rstest::rstest;
use seqpipe::compose::pipe_all;
use seqpipe::ender::{count, first, sum, to_vec};
use seqpipe::operator::{filter, map, skip, take_first, take_while};
use seqpipe::pipe;
use seqpipe::sequence::{BoxedOperator, boxed, erase};

// =============================================================================
// Plain values
// =============================================================================

#[rstest]
fn test_pipe_value_only_returns_source() {
    let source = vec![1, 2, 3];
    let result = pipe!(source);
    assert_eq!(result, vec![1, 2, 3]);
}

#[rstest]
fn test_pipe_empty_array_returns_source() {
    let result = pipe!(String::from("unchanged"), []);
    assert_eq!(result, "unchanged");
}

#[rstest]
fn test_pipe_plain_functions() {
    fn to_string(value: i32) -> String {
        value.to_string()
    }
    fn get_length(text: String) -> usize {
        text.len()
    }

    assert_eq!(pipe!(-1024, to_string, get_length), 5);
}

// =============================================================================
// Operators and enders
// =============================================================================

#[rstest]
fn test_pipe_operators_then_ender() {
    let result = pipe!(
        1..,
        filter(|value: &i32, _| value % 3 == 0),
        map(|value: i32, index| (index, value)),
        take_first(3),
        to_vec(),
    );
    assert_eq!(result, vec![(0, 3), (1, 6), (2, 9)]);
}

#[rstest]
fn test_pipe_without_ender_stays_lazy() {
    let mut sequence = pipe!(1.., map(|value: u64, _| value * value), skip(2));
    assert_eq!(sequence.next(), Some(9));
    assert_eq!(sequence.next(), Some(16));
}

#[rstest]
fn test_pipe_array_form_matches_variadic_form() {
    let variadic: i32 = pipe!(vec![4, 8, 15, 16, 23, 42], take_while(|value: &i32, _| *value < 20), sum());
    let array: i32 = pipe!(vec![4, 8, 15, 16, 23, 42], [take_while(|value: &i32, _| *value < 20), sum()]);
    assert_eq!(variadic, 43);
    assert_eq!(array, variadic);
}

#[rstest]
#[case(vec![], None)]
#[case(vec!["only"], Some("only"))]
#[case(vec!["a", "b"], Some("a"))]
fn test_pipe_into_first(#[case] source: Vec<&str>, #[case] expected: Option<&str>) {
    assert_eq!(pipe!(source, first()), expected);
}

#[rstest]
fn test_pipe_reuses_operator_values() {
    let evens = filter(|value: &i32, _| value % 2 == 0);
    let counter = count();

    assert_eq!(pipe!(vec![1, 2, 3, 4], &evens, &counter), 2);
    assert_eq!(pipe!(vec![6, 8], &evens, &counter), 2);
}

// =============================================================================
// Runtime operator lists
// =============================================================================

#[rstest]
fn test_pipe_all_with_erased_operators() {
    let operators: Vec<BoxedOperator<'_, i32>> = vec![
        erase(skip(1)),
        erase(map(|value: i32, _| value - 1)),
        erase(take_first(2)),
    ];
    let result: Vec<i32> = pipe_all(boxed(vec![10, 20, 30, 40]), operators).collect();
    assert_eq!(result, vec![19, 29]);
}

#[rstest]
fn test_pipe_all_with_no_operators() {
    let operators: Vec<BoxedOperator<'_, char>> = Vec::new();
    let result: String = pipe_all(boxed("abc".chars()), operators).collect();
    assert_eq!(result, "abc");
}
