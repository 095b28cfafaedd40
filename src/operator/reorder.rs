//! Eager operators: applying one materializes the whole source at once.

use std::cmp::Ordering;
use std::vec;

use crate::direct::{self, Order, PairOptions, Pairs};

/// Operator form of [`direct::sort`].
pub fn sort<S>() -> impl Fn(S) -> vec::IntoIter<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    direct::sort
}

/// Operator form of [`direct::sort_by`].
pub fn sort_by<S, F>(compare: F) -> impl Fn(S) -> vec::IntoIter<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item, &S::Item) -> Ordering + Clone,
{
    move |source| direct::sort_by(source, compare.clone())
}

/// Operator form of [`direct::sort_by_key`].
pub fn sort_by_key<S, K, F>(key: F, order: Order) -> impl Fn(S) -> vec::IntoIter<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K + Clone,
    K: Ord,
{
    move |source| direct::sort_by_key(source, key.clone(), order)
}

/// Operator form of [`direct::reverse`].
pub fn reverse<S: IntoIterator>() -> impl Fn(S) -> vec::IntoIter<S::Item> {
    direct::reverse
}

/// Operator form of [`direct::pairs`].
pub fn pairs<S>(options: PairOptions) -> impl Fn(S) -> Pairs<S::Item>
where
    S: IntoIterator,
    S::Item: Clone,
{
    move |source| direct::pairs(source, options)
}
