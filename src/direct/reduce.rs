//! Folding a sequence into a single value.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

use crate::error::SequenceError;

/// Folds the source, using the first item as the initial accumulator.
///
/// The reducer receives `(accumulator, item, index)` starting at index 1.
/// Returns `None` for an empty source.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::reduce;
///
/// assert_eq!(reduce(vec![2, 3, 4], |product, value, _| product * value), Some(24));
/// assert_eq!(reduce(Vec::<i32>::new(), |sum, value, _| sum + value), None);
/// ```
pub fn reduce<S, F>(source: S, mut reducer: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
{
    let mut iterator = source.into_iter().enumerate();
    let (_, initial) = iterator.next()?;
    Some(iterator.fold(initial, |accumulator, (index, item)| {
        reducer(accumulator, item, index)
    }))
}

/// Like [`reduce`], but an empty source is an error.
///
/// # Errors
///
/// [`SequenceError::Empty`] when the source yields nothing.
pub fn reduce_or_error<S, F>(source: S, reducer: F) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
{
    reduce(source, reducer).ok_or_else(|| {
        SequenceError::Empty {
            operation: "reduce_or_error",
        }
        .traced()
    })
}

/// Folds the source starting from `seed`; the reducer runs for every item
/// from index 0. An empty source returns the seed.
pub fn reduce_seeded<S, A, F>(source: S, seed: A, mut reducer: F) -> A
where
    S: IntoIterator,
    F: FnMut(A, S::Item, usize) -> A,
{
    source
        .into_iter()
        .enumerate()
        .fold(seed, |accumulator, (index, item)| reducer(accumulator, item, index))
}

/// Sums the items.
pub fn sum<S, R>(source: S) -> R
where
    S: IntoIterator,
    R: Sum<S::Item>,
{
    source.into_iter().sum()
}

/// Counts the items.
pub fn count<S: IntoIterator>(source: S) -> usize {
    source.into_iter().count()
}

/// The smallest item; the first one on ties.
pub fn min<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    extreme_by(source, |candidate, current| candidate < current)
}

/// The smallest item.
///
/// # Errors
///
/// [`SequenceError::Empty`] when the source yields nothing.
pub fn min_or_error<S>(source: S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    S::Item: Ord,
{
    min(source).ok_or_else(|| SequenceError::Empty { operation: "min_or_error" }.traced())
}

/// The largest item; the first one on ties.
pub fn max<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    extreme_by(source, |candidate, current| candidate > current)
}

/// The largest item.
///
/// # Errors
///
/// [`SequenceError::Empty`] when the source yields nothing.
pub fn max_or_error<S>(source: S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    S::Item: Ord,
{
    max(source).ok_or_else(|| SequenceError::Empty { operation: "max_or_error" }.traced())
}

fn extreme_by<S, F>(source: S, mut replaces: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    source.into_iter().fold(None, |extreme, item| match extreme {
        Some(current) if replaces(&item, &current) => Some(item),
        Some(current) => Some(current),
        None => Some(item),
    })
}

fn extreme_by_key<S, K, F, C>(source: S, mut key: F, mut replaces: C) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    C: FnMut(&K, &K) -> bool,
{
    let mut extreme: Option<(S::Item, K)> = None;
    for item in source {
        let candidate = key(&item);
        let keep_current = extreme
            .as_ref()
            .is_some_and(|(_, current)| !replaces(&candidate, current));
        if !keep_current {
            extreme = Some((item, candidate));
        }
    }
    extreme.map(|(item, _)| item)
}

/// The item with the smallest key; the first one on ties.
///
/// A later key replaces the current minimum only when it compares strictly
/// smaller. An incomparable key (such as `NaN`) therefore never replaces the
/// current minimum, and once it is the current minimum nothing replaces it.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::min_by_key;
///
/// let words = vec!["pear", "fig", "kiwi", "yam"];
/// assert_eq!(min_by_key(words, |word| word.len()), Some("fig"));
/// ```
pub fn min_by_key<S, K, F>(source: S, key: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    extreme_by_key(source, key, |candidate, current| candidate < current)
}

/// The item with the smallest key.
///
/// # Errors
///
/// [`SequenceError::Empty`] when the source yields nothing.
pub fn min_by_key_or_error<S, K, F>(source: S, key: F) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    min_by_key(source, key).ok_or_else(|| {
        SequenceError::Empty {
            operation: "min_by_key_or_error",
        }
        .traced()
    })
}

/// The item with the largest key; the first one on ties.
pub fn max_by_key<S, K, F>(source: S, key: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    extreme_by_key(source, key, |candidate, current| candidate > current)
}

/// The item with the largest key.
///
/// # Errors
///
/// [`SequenceError::Empty`] when the source yields nothing.
pub fn max_by_key_or_error<S, K, F>(source: S, key: F) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    max_by_key(source, key).ok_or_else(|| {
        SequenceError::Empty {
            operation: "max_by_key_or_error",
        }
        .traced()
    })
}

/// `true` when every item satisfies the predicate. Stops at the first
/// failure; an empty source is `true`.
pub fn every<S, P>(source: S, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .all(|(index, item)| predicate(&item, index))
}

/// `true` when some item satisfies the predicate. Stops at the first match.
pub fn some<S, P>(source: S, mut predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .any(|(index, item)| predicate(&item, index))
}

/// `true` when some item equals `value`.
pub fn contains<S>(source: S, value: &S::Item) -> bool
where
    S: IntoIterator,
    S::Item: PartialEq,
{
    source.into_iter().any(|item| item == *value)
}

/// Runs `effect(item, index)` for every item.
pub fn for_each<S, F>(source: S, mut effect: F)
where
    S: IntoIterator,
    F: FnMut(S::Item, usize),
{
    for (index, item) in source.into_iter().enumerate() {
        effect(item, index);
    }
}

/// Splits the items into those satisfying the predicate and the rest, in
/// one pass.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::partition;
///
/// let (even, odd) = partition(1..=6, |value, _| value % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<S, P>(source: S, mut predicate: P) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for (index, item) in source.into_iter().enumerate() {
        if predicate(&item, index) {
            accepted.push(item);
        } else {
            rejected.push(item);
        }
    }
    (accepted, rejected)
}

/// Formats every item and joins them with `separator`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::join_as_string;
///
/// assert_eq!(join_as_string(vec![1, 2, 3], ", "), "1, 2, 3");
/// ```
pub fn join_as_string<S>(source: S, separator: &str) -> String
where
    S: IntoIterator,
    S::Item: Display,
{
    let mut joined = String::new();
    for (index, item) in source.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        joined.push_str(&item.to_string());
    }
    joined
}

/// Collects the items into a `Vec`.
pub fn to_vec<S: IntoIterator>(source: S) -> Vec<S::Item> {
    source.into_iter().collect()
}

/// Collects the items into a `HashSet`.
pub fn to_set<S>(source: S) -> HashSet<S::Item>
where
    S: IntoIterator,
    S::Item: Eq + Hash,
{
    source.into_iter().collect()
}

/// Collects key-value pairs into a `HashMap`; later pairs overwrite earlier
/// ones with the same key.
pub fn to_map<S, K, V>(source: S) -> HashMap<K, V>
where
    S: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
{
    source.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_reduce_indices_start_at_one() {
        let mut indices = Vec::new();
        let result = reduce(vec!['a', 'b', 'c'], |accumulator, item, index| {
            indices.push(index);
            accumulator.max(item)
        });
        assert_eq!(result, Some('c'));
        assert_eq!(indices, vec![1, 2]);
    }

    #[rstest]
    fn test_reduce_seeded_indices_start_at_zero() {
        let mut indices = Vec::new();
        let result = reduce_seeded(vec![1, 2], String::new(), |text, item, index| {
            indices.push(index);
            text + &item.to_string()
        });
        assert_eq!(result, "12");
        assert_eq!(indices, vec![0, 1]);
    }

    #[rstest]
    fn test_reduce_or_error_on_empty() {
        assert_eq!(
            reduce_or_error(Vec::<i32>::new(), |a, b, _| a + b),
            Err(SequenceError::Empty {
                operation: "reduce_or_error"
            })
        );
    }

    #[rstest]
    fn test_min_max_keep_first_on_ties() {
        let source = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        assert_eq!(min_by_key(source.clone(), |pair: &(i32, char)| pair.0), Some((0, 'b')));
        assert_eq!(max_by_key(source.clone(), |pair: &(i32, char)| pair.0), Some((1, 'a')));
        assert_eq!(max(vec![3, 7, 7, 1]), Some(7));
        assert_eq!(min(vec![3, 7, 1, 1]), Some(1));
    }

    #[rstest]
    fn test_extremes_of_empty() {
        assert_eq!(min(Vec::<i32>::new()), None);
        assert!(max_or_error(Vec::<i32>::new()).is_err());
        assert!(min_by_key_or_error(Vec::<f64>::new(), |value: &f64| *value).is_err());
    }

    #[rstest]
    fn test_min_by_float_key() {
        let result = min_by_key(vec![2.5, -1.0, 0.5], |value: &f64| *value);
        assert_eq!(result, Some(-1.0));
    }

    #[rstest]
    fn test_min_by_key_keeps_leading_nan() {
        let result = min_by_key(vec![f64::NAN, 1.0, 0.5], |value: &f64| *value);
        assert!(result.is_some_and(f64::is_nan));
        let result = min_by_key(vec![1.0, f64::NAN, 0.5], |value: &f64| *value);
        assert_eq!(result, Some(0.5));
    }

    #[rstest]
    fn test_join_as_string_formats_with_display() {
        assert_eq!(join_as_string(vec![1.5, -2.0], "; "), "1.5; -2");
        assert_eq!(join_as_string(vec!['x'], ", "), "x");
    }

    #[rstest]
    #[case(vec![], true, false)]
    #[case(vec![2, 4], true, true)]
    #[case(vec![2, 3], false, true)]
    #[case(vec![1, 3], false, false)]
    fn test_every_and_some(#[case] source: Vec<i32>, #[case] all_even: bool, #[case] any_even: bool) {
        assert_eq!(every(source.clone(), |value, _| value % 2 == 0), all_even);
        assert_eq!(some(source, |value, _| value % 2 == 0), any_even);
    }

    #[rstest]
    fn test_collectors() {
        assert_eq!(count(0..5), 5);
        assert_eq!(sum::<_, i32>(vec![1, 2, 3]), 6);
        assert!(contains(vec!["a", "b"], &"b"));
        assert_eq!(to_set(vec![1, 1, 2]).len(), 2);
        let map = to_map(vec![("a", 1), ("a", 2)]);
        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(join_as_string(Vec::<i32>::new(), "-"), "");
    }

    #[rstest]
    fn test_for_each_passes_index() {
        let mut seen = Vec::new();
        for_each("xy".chars(), |letter, index| seen.push(format!("{index}{letter}")));
        assert_eq!(seen, vec!["0x", "1y"]);
    }
}
