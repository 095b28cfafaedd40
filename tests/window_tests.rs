//! Integration tests for the windowing and segmentation operators.

use proptest::prelude::*;
use rstest::rstest;
use seqpipe::SequenceError;
use seqpipe::direct;
use seqpipe::ender::{count, to_vec};
use seqpipe::operator::{
    chunk, chunk_strict, pairwise, pairwise_cyclic, segmentize, segmentize_by, slide_through,
    slide_through_cyclic,
};
use seqpipe::pipe;
use seqpipe::same_value::SameValue;

// =============================================================================
// pairwise / pairwise_cyclic
// =============================================================================

#[rstest]
#[case(vec![], vec![])]
#[case(vec!['a'], vec![])]
#[case(vec!['a', 'b', 'c'], vec![('a', 'b'), ('b', 'c')])]
fn test_pairwise(#[case] source: Vec<char>, #[case] expected: Vec<(char, char)>) {
    assert_eq!(pipe!(source, pairwise(), to_vec()), expected);
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec!['a'], vec![('a', 'a')])]
#[case(vec!['a', 'b'], vec![('a', 'b'), ('b', 'a')])]
#[case(vec!['a', 'b', 'c'], vec![('a', 'b'), ('b', 'c'), ('c', 'a')])]
fn test_pairwise_cyclic_boundaries(#[case] source: Vec<char>, #[case] expected: Vec<(char, char)>) {
    assert_eq!(pipe!(source, pairwise_cyclic(), to_vec()), expected);
}

// =============================================================================
// slide_through / slide_through_cyclic
// =============================================================================

#[rstest]
fn test_slide_through_yields_full_windows_only() {
    let windows = pipe!(vec![1, 2, 3, 4], slide_through(3).unwrap(), to_vec());
    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);

    let too_short = pipe!(vec![1, 2], slide_through(3).unwrap(), to_vec());
    assert!(too_short.is_empty());
}

#[rstest]
fn test_slide_through_yielded_windows_are_snapshots() {
    let mut windows = direct::slide_through(vec![1, 2, 3], 2).unwrap();
    let mut first = windows.next().unwrap();
    first.push(99);
    assert_eq!(windows.next(), Some(vec![2, 3]));
}

#[rstest]
fn test_slide_through_cyclic_long_source() {
    let windows = pipe!(vec![1, 2, 3, 4, 5], slide_through_cyclic(3).unwrap(), to_vec());
    assert_eq!(
        windows,
        vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![4, 5, 1], vec![5, 1, 2]],
    );
}

#[rstest]
fn test_slide_through_cyclic_short_source() {
    let windows = pipe!(vec![1, 2, 3], slide_through_cyclic(4).unwrap(), to_vec());
    assert_eq!(windows, vec![vec![1, 2, 3, 1], vec![2, 3, 1, 2], vec![3, 1, 2, 3]]);
}

#[rstest]
fn test_slide_through_cyclic_source_equal_to_window() {
    let windows = pipe!(vec!['x', 'y'], slide_through_cyclic(2).unwrap(), to_vec());
    assert_eq!(windows, vec![vec!['x', 'y'], vec!['y', 'x']]);
}

#[rstest]
fn test_slide_through_cyclic_single_item_fills_window() {
    let windows = pipe!(vec![7], slide_through_cyclic(3).unwrap(), to_vec());
    assert_eq!(windows, vec![vec![7, 7, 7]]);
}

#[rstest]
#[case(0)]
fn test_window_sizes_are_validated_at_construction(#[case] size: usize) {
    assert_eq!(
        slide_through::<Vec<i32>>(size).err(),
        Some(SequenceError::InvalidWindowSize { window_size: size }),
    );
    assert_eq!(
        slide_through_cyclic::<Vec<i32>>(size).err(),
        Some(SequenceError::InvalidWindowSize { window_size: size }),
    );
    assert_eq!(
        chunk::<Vec<i32>>(size).err(),
        Some(SequenceError::InvalidChunkSize { chunk_size: size }),
    );
    assert_eq!(
        chunk_strict::<Vec<i32>>(size).err(),
        Some(SequenceError::InvalidChunkSize { chunk_size: size }),
    );
}

proptest! {
    #[test]
    fn prop_slide_through_window_count(length in 0usize..40, window_size in 1usize..8) {
        let windows = pipe!(0..length, slide_through(window_size).unwrap(), count());
        prop_assert_eq!(windows, (length + 1).saturating_sub(window_size));
    }

    #[test]
    fn prop_slide_through_cyclic_yields_one_window_per_item(length in 0usize..40, window_size in 1usize..8) {
        let windows = pipe!(0..length, slide_through_cyclic(window_size).unwrap(), to_vec());
        prop_assert_eq!(windows.len(), length);
        for (offset, window) in windows.iter().enumerate() {
            let expected: Vec<usize> = (0..window_size).map(|step| (offset + step) % length).collect();
            prop_assert_eq!(window, &expected);
        }
    }
}

// =============================================================================
// chunk / chunk_strict
// =============================================================================

#[rstest]
fn test_chunk_allows_short_last_chunk() {
    let chunks = pipe!(vec![1, 2, 3, 4, 5], chunk(2).unwrap(), to_vec());
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[rstest]
fn test_chunk_strict_fails_after_full_chunks() {
    let chunks = pipe!(vec![1, 2, 3, 4, 5], chunk_strict(2).unwrap(), to_vec());
    assert_eq!(
        chunks,
        vec![
            Ok(vec![1, 2]),
            Ok(vec![3, 4]),
            Err(SequenceError::IncompleteChunk { chunk_size: 2, remainder: 1 }),
        ],
    );
}

#[rstest]
fn test_chunk_strict_exact_length_succeeds() {
    let chunks: Result<Vec<Vec<char>>, SequenceError> = pipe!("abcdef".chars(), chunk_strict(3).unwrap(), to_vec())
        .into_iter()
        .collect();
    assert_eq!(chunks, Ok(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]));
}

#[rstest]
fn test_windows_of_empty_source_are_empty() {
    let empty = Vec::<u8>::new;
    assert_eq!(pipe!(empty(), pairwise(), count()), 0);
    assert_eq!(pipe!(empty(), pairwise_cyclic(), count()), 0);
    assert_eq!(pipe!(empty(), slide_through(2).unwrap(), count()), 0);
    assert_eq!(pipe!(empty(), slide_through_cyclic(2).unwrap(), count()), 0);
    assert_eq!(pipe!(empty(), chunk(2).unwrap(), count()), 0);
    assert_eq!(pipe!(empty(), chunk_strict(2).unwrap(), count()), 0);
    assert_eq!(pipe!(empty(), segmentize(), count()), 0);
}

// =============================================================================
// segmentize / segmentize_by
// =============================================================================

#[rstest]
fn test_segmentize_by_sign_groups_nan_together() {
    let source = vec![1.0, 2.0, 3.0, -4.0, -5.0, -6.0, -7.0, -8.0, 9.0, -10.0, f64::NAN, f64::NAN, 13.0];
    let segments = pipe!(source, segmentize_by(|value: &f64, _| value.signum()), to_vec());

    let expected = vec![
        vec![1.0, 2.0, 3.0],
        vec![-4.0, -5.0, -6.0, -7.0, -8.0],
        vec![9.0],
        vec![-10.0],
        vec![f64::NAN, f64::NAN],
        vec![13.0],
    ];
    assert!(segments.same_value(&expected), "{segments:?}");
}

#[rstest]
fn test_segmentize_keeps_final_segment() {
    let segments = pipe!("aabccc".chars(), segmentize(), to_vec());
    assert_eq!(segments, vec![vec!['a', 'a'], vec!['b'], vec!['c', 'c', 'c']]);
}

#[rstest]
fn test_segmentize_distinguishes_signed_zeros() {
    let segments = pipe!(vec![0.0, -0.0, -0.0], segmentize(), count());
    assert_eq!(segments, 2);
}

#[rstest]
fn test_segmentize_by_receives_index() {
    let segments = pipe!(0..7, segmentize_by(|_: &i32, index| index / 3), to_vec());
    assert_eq!(segments, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
}
