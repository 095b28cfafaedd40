use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

use crate::direct;
use crate::error::SequenceError;

/// Ender form of [`direct::reduce`].
pub fn reduce<S, F>(reducer: F) -> impl Fn(S) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item, usize) -> S::Item + Clone,
{
    move |source| direct::reduce(source, reducer.clone())
}

/// Ender form of [`direct::reduce_or_error`].
pub fn reduce_or_error<S, F>(reducer: F) -> impl Fn(S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item, usize) -> S::Item + Clone,
{
    move |source| direct::reduce_or_error(source, reducer.clone())
}

/// Ender form of [`direct::reduce_seeded`]. The seed is cloned for every
/// source.
///
/// # Examples
///
/// ```rust
/// use seqpipe::ender::reduce_seeded;
///
/// let histogram = reduce_seeded([0_usize; 3], |mut counts: [usize; 3], value: usize, _| {
///     counts[value % 3] += 1;
///     counts
/// });
/// assert_eq!(histogram(0..10), [4, 3, 3]);
/// ```
pub fn reduce_seeded<S, A, F>(seed: A, reducer: F) -> impl Fn(S) -> A
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(A, S::Item, usize) -> A + Clone,
{
    move |source| direct::reduce_seeded(source, seed.clone(), reducer.clone())
}

/// Ender form of [`direct::sum`].
pub fn sum<S, R>() -> impl Fn(S) -> R
where
    S: IntoIterator,
    R: Sum<S::Item>,
{
    direct::sum
}

/// Ender form of [`direct::count`].
pub fn count<S: IntoIterator>() -> impl Fn(S) -> usize {
    direct::count
}

/// Ender form of [`direct::min`].
pub fn min<S>() -> impl Fn(S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    direct::min
}

/// Ender form of [`direct::min_or_error`].
pub fn min_or_error<S>() -> impl Fn(S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    S::Item: Ord,
{
    direct::min_or_error
}

/// Ender form of [`direct::max`].
pub fn max<S>() -> impl Fn(S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    direct::max
}

/// Ender form of [`direct::max_or_error`].
pub fn max_or_error<S>() -> impl Fn(S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    S::Item: Ord,
{
    direct::max_or_error
}

/// Ender form of [`direct::min_by_key`].
pub fn min_by_key<S, K, F>(key: F) -> impl Fn(S) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K + Clone,
    K: PartialOrd,
{
    move |source| direct::min_by_key(source, key.clone())
}

/// Ender form of [`direct::min_by_key_or_error`].
pub fn min_by_key_or_error<S, K, F>(key: F) -> impl Fn(S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K + Clone,
    K: PartialOrd,
{
    move |source| direct::min_by_key_or_error(source, key.clone())
}

/// Ender form of [`direct::max_by_key`].
pub fn max_by_key<S, K, F>(key: F) -> impl Fn(S) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K + Clone,
    K: PartialOrd,
{
    move |source| direct::max_by_key(source, key.clone())
}

/// Ender form of [`direct::max_by_key_or_error`].
pub fn max_by_key_or_error<S, K, F>(key: F) -> impl Fn(S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K + Clone,
    K: PartialOrd,
{
    move |source| direct::max_by_key_or_error(source, key.clone())
}

/// Ender form of [`direct::every`].
pub fn every<S, P>(predicate: P) -> impl Fn(S) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::every(source, predicate.clone())
}

/// Ender form of [`direct::some`].
pub fn some<S, P>(predicate: P) -> impl Fn(S) -> bool
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::some(source, predicate.clone())
}

/// Ender form of [`direct::contains`]. The ender owns `value`.
pub fn contains<S>(value: S::Item) -> impl Fn(S) -> bool
where
    S: IntoIterator,
    S::Item: PartialEq,
{
    move |source| direct::contains(source, &value)
}

/// Ender form of [`direct::for_each`].
pub fn for_each<S, F>(effect: F) -> impl Fn(S)
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) + Clone,
{
    move |source| direct::for_each(source, effect.clone())
}

/// Ender form of [`direct::partition`].
pub fn partition<S, P>(predicate: P) -> impl Fn(S) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::partition(source, predicate.clone())
}

/// Ender form of [`direct::join_as_string`].
pub fn join_as_string<S>(separator: impl Into<String>) -> impl Fn(S) -> String
where
    S: IntoIterator,
    S::Item: Display,
{
    let separator = separator.into();
    move |source| direct::join_as_string(source, &separator)
}

/// Ender form of [`direct::to_vec`].
pub fn to_vec<S: IntoIterator>() -> impl Fn(S) -> Vec<S::Item> {
    direct::to_vec
}

/// Ender form of [`direct::to_set`].
pub fn to_set<S>() -> impl Fn(S) -> HashSet<S::Item>
where
    S: IntoIterator,
    S::Item: Eq + Hash,
{
    direct::to_set
}

/// Ender form of [`direct::to_map`].
pub fn to_map<S, K, V>() -> impl Fn(S) -> HashMap<K, V>
where
    S: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
{
    direct::to_map
}
