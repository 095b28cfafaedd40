//! Property-based tests comparing operator chains with the equivalent
//! standard iterator adapters.

use proptest::prelude::*;
use seqpipe::direct;
use seqpipe::ender::to_vec;
use seqpipe::operator::{filter, map, skip, skip_while, slice, take_first, take_while};
use seqpipe::pipe;

proptest! {
    #[test]
    fn prop_filter_map_take_skip_matches_std(
        source in prop::collection::vec(-1000i32..1000, 0..64),
        skipped in 0usize..16,
        taken in 0usize..16,
    ) {
        let result = pipe!(
            source.clone(),
            filter(|value: &i32, _| value % 3 != 0),
            map(|value: i32, _| value * 2),
            skip(skipped),
            take_first(taken),
            to_vec(),
        );
        let expected: Vec<i32> = source
            .into_iter()
            .filter(|value| value % 3 != 0)
            .map(|value| value * 2)
            .skip(skipped)
            .take(taken)
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_take_while_and_skip_while_split_the_source(
        source in prop::collection::vec(-50i32..50, 0..64),
        threshold in -50i32..50,
    ) {
        let head = pipe!(source.clone(), take_while(move |value: &i32, _| *value < threshold), to_vec());
        let tail = pipe!(source.clone(), skip_while(move |value: &i32, _| *value < threshold), to_vec());

        prop_assert_eq!(head.clone(), source.iter().copied().take_while(|value| *value < threshold).collect::<Vec<_>>());
        prop_assert_eq!([head, tail].concat(), source);
    }

    #[test]
    fn prop_slice_matches_std_slicing(
        source in prop::collection::vec(any::<u8>(), 0..48),
        start in 0usize..56,
        length in 0usize..56,
    ) {
        let end = start + length;
        let result = pipe!(source.clone(), slice(start..end).unwrap(), to_vec());
        let clamped_start = start.min(source.len());
        let clamped_end = end.min(source.len());
        prop_assert_eq!(result, source[clamped_start..clamped_end].to_vec());
    }

    #[test]
    fn prop_independent_copies_give_identical_results(source in prop::collection::vec(any::<i16>(), 0..32)) {
        let double_evens = |items: Vec<i16>| {
            pipe!(
                items,
                filter(|value: &i16, index| (i64::from(*value) + index as i64) % 2 == 0),
                map(|value: i16, _| value.wrapping_mul(2)),
                to_vec(),
            )
        };
        prop_assert_eq!(double_evens(source.clone()), double_evens(source));
    }

    #[test]
    fn prop_sort_matches_std_sort(source in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut expected = source.clone();
        expected.sort_unstable();
        prop_assert_eq!(direct::sort(source).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_unique_matches_first_occurrences(source in prop::collection::vec(0u8..16, 0..64)) {
        let mut seen = std::collections::HashSet::new();
        let expected: Vec<u8> = source.iter().copied().filter(|value| seen.insert(*value)).collect();
        prop_assert_eq!(direct::unique(source).collect::<Vec<_>>(), expected);
    }
}
