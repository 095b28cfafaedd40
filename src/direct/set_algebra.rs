//! Deduplication and set algebra.
//!
//! All comparisons use [`SameValue`]. The `other` operand of `difference*`
//! and `intersection*` is collected eagerly when the adapter is built; the
//! source itself is scanned lazily and its order is preserved.

use std::iter::Flatten;
use std::sync::Arc;

use crate::same_value::{SameValue, SameValueKey, SeenSet, seen_set};

use super::clone_item;

/// Yields the first item of every distinct projection. See [`unique_by`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct UniqueBy<I, F, K> {
    iterator: I,
    projector: F,
    seen: SeenSet<K>,
}

impl<I, F, K> Iterator for UniqueBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: SameValue,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            iterator,
            projector,
            seen,
        } = self;
        iterator.find(|item| seen.insert(SameValueKey(projector(item))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iterator.size_hint().1)
    }
}

/// Drops every item whose projection has been seen before.
///
/// Every distinct projection is remembered, so memory grows with the number
/// of distinct keys.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::unique_by;
///
/// let result: Vec<&str> = unique_by(vec!["ant", "bee", "cat", "dingo"], |word| word.len()).collect();
/// assert_eq!(result, vec!["ant", "dingo"]);
/// ```
pub fn unique_by<S, K, F>(source: S, projector: F) -> UniqueBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: SameValue,
{
    UniqueBy {
        iterator: source.into_iter(),
        projector,
        seen: seen_set(),
    }
}

/// [`UniqueBy`] keyed by the items themselves.
pub type Unique<I> =
    UniqueBy<I, fn(&<I as Iterator>::Item) -> <I as Iterator>::Item, <I as Iterator>::Item>;

/// Drops repeated items, keeping first occurrences.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::unique;
///
/// let result: Vec<f64> = unique(vec![1.0, f64::NAN, 1.0, f64::NAN, -0.0, 0.0]).collect();
/// assert_eq!(result.len(), 4);
/// assert!(result[1].is_nan());
/// ```
pub fn unique<S>(source: S) -> Unique<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone + SameValue,
{
    unique_by(source, clone_item as fn(&S::Item) -> S::Item)
}

/// Drops items whose projection equals the previous one. See
/// [`sorted_unique_by`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct SortedUniqueBy<I, F, K> {
    iterator: I,
    projector: F,
    previous: Option<K>,
}

impl<I, F, K> Iterator for SortedUniqueBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: SameValue,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iterator.by_ref() {
            let key = (self.projector)(&item);
            let repeated = self
                .previous
                .as_ref()
                .is_some_and(|previous| previous.same_value(&key));
            self.previous = Some(key);
            if !repeated {
                return Some(item);
            }
        }
        None
    }
}

/// A cheaper [`unique_by`] for input already sorted by the projection.
///
/// Only the previous projection is remembered. On unsorted input,
/// non-adjacent duplicates are **not** removed.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::sorted_unique_by;
///
/// let result: Vec<i32> = sorted_unique_by(vec![10, 11, 20, 12], |value| value / 10).collect();
/// assert_eq!(result, vec![10, 20, 12]);
/// ```
pub fn sorted_unique_by<S, K, F>(source: S, projector: F) -> SortedUniqueBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: SameValue,
{
    SortedUniqueBy {
        iterator: source.into_iter(),
        projector,
        previous: None,
    }
}

/// [`SortedUniqueBy`] keyed by the items themselves.
pub type SortedUnique<I> =
    SortedUniqueBy<I, fn(&<I as Iterator>::Item) -> <I as Iterator>::Item, <I as Iterator>::Item>;

/// Collapses runs of equal items. The input must be sorted for this to
/// remove every duplicate.
pub fn sorted_unique<S>(source: S) -> SortedUnique<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone + SameValue,
{
    sorted_unique_by(source, clone_item as fn(&S::Item) -> S::Item)
}

pub(crate) fn collect_others<O>(others: O) -> Arc<SeenSet<O::Item>>
where
    O: IntoIterator,
    O::Item: SameValue,
{
    let mut seen = seen_set();
    seen.extend(others.into_iter().map(SameValueKey));
    #[cfg(feature = "tracing")]
    tracing::trace!(distinct = seen.len(), "collected set operand");
    Arc::new(seen)
}

pub(crate) fn collect_others_by<O, K, F>(others: O, projector: &mut F) -> Arc<SeenSet<K>>
where
    O: IntoIterator,
    F: FnMut(&O::Item) -> K,
    K: SameValue,
{
    collect_others(others.into_iter().map(|other| projector(&other)))
}

/// Keeps or drops source items by membership of their projection in a
/// collected set. Backs `difference*` and `intersection*`.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Membership<I, F, K> {
    iterator: I,
    projector: F,
    others: Arc<SeenSet<K>>,
    retain_members: bool,
}

impl<I, F, K> Membership<I, F, K> {
    pub(crate) const fn new(
        iterator: I,
        projector: F,
        others: Arc<SeenSet<K>>,
        retain_members: bool,
    ) -> Self {
        Self {
            iterator,
            projector,
            others,
            retain_members,
        }
    }
}

impl<I, F, K> Iterator for Membership<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: SameValue,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            iterator,
            projector,
            others,
            retain_members,
        } = self;
        iterator.find(|item| others.contains(&SameValueKey(projector(item))) == *retain_members)
    }
}

/// Keeps or drops source items by a custom equality against a collected
/// list. Backs `difference_using` and `intersection_using`.
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct MembershipUsing<I, U, E> {
    iterator: I,
    others: Arc<[U]>,
    equals: E,
    retain_members: bool,
}

impl<I, U, E> MembershipUsing<I, U, E> {
    pub(crate) const fn new(iterator: I, others: Arc<[U]>, equals: E, retain_members: bool) -> Self {
        Self {
            iterator,
            others,
            equals,
            retain_members,
        }
    }
}

impl<I, U, E> Iterator for MembershipUsing<I, U, E>
where
    I: Iterator,
    E: FnMut(&I::Item, &U) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            iterator,
            others,
            equals,
            retain_members,
        } = self;
        iterator.find(|item| others.iter().any(|other| equals(item, other)) == *retain_members)
    }
}

/// Yields the source items that are not in `others`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::difference;
///
/// let result: Vec<i32> = difference(vec![1, 2, 3, 4, 5], vec![4, 2, 6]).collect();
/// assert_eq!(result, vec![1, 3, 5]);
/// ```
pub fn difference<S, O>(
    source: S,
    others: O,
) -> Membership<S::IntoIter, fn(&S::Item) -> S::Item, S::Item>
where
    S: IntoIterator,
    O: IntoIterator<Item = S::Item>,
    S::Item: Clone + SameValue,
{
    Membership::new(
        source.into_iter(),
        clone_item as fn(&S::Item) -> S::Item,
        collect_others(others),
        false,
    )
}

/// Yields the source items whose projection matches no projection of
/// `others`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::difference_by;
///
/// let result: Vec<i32> =
///     difference_by(300..308, vec![2, 4], |value| value % 5).collect();
/// assert_eq!(result, vec![300, 301, 303, 305, 306]);
/// ```
pub fn difference_by<S, O, K, F>(
    source: S,
    others: O,
    mut projector: F,
) -> Membership<S::IntoIter, F, K>
where
    S: IntoIterator,
    O: IntoIterator<Item = S::Item>,
    F: FnMut(&S::Item) -> K,
    K: SameValue,
{
    let others = collect_others_by(others, &mut projector);
    Membership::new(source.into_iter(), projector, others, false)
}

/// Yields the source items for which `equals(item, other)` holds for no
/// item of `others`. Costs one comparison per pair.
pub fn difference_using<S, O, E>(
    source: S,
    others: O,
    equals: E,
) -> MembershipUsing<S::IntoIter, O::Item, E>
where
    S: IntoIterator,
    O: IntoIterator,
    E: FnMut(&S::Item, &O::Item) -> bool,
{
    MembershipUsing::new(source.into_iter(), others.into_iter().collect(), equals, false)
}

/// Yields the source items that are also in `others`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::intersection;
///
/// let result: Vec<char> = intersection("banana".chars(), "an".chars()).collect();
/// assert_eq!(result, vec!['a', 'n', 'a', 'n', 'a']);
/// ```
pub fn intersection<S, O>(
    source: S,
    others: O,
) -> Membership<S::IntoIter, fn(&S::Item) -> S::Item, S::Item>
where
    S: IntoIterator,
    O: IntoIterator<Item = S::Item>,
    S::Item: Clone + SameValue,
{
    Membership::new(
        source.into_iter(),
        clone_item as fn(&S::Item) -> S::Item,
        collect_others(others),
        true,
    )
}

/// Yields the source items whose projection matches a projection of
/// `others`.
pub fn intersection_by<S, O, K, F>(
    source: S,
    others: O,
    mut projector: F,
) -> Membership<S::IntoIter, F, K>
where
    S: IntoIterator,
    O: IntoIterator<Item = S::Item>,
    F: FnMut(&S::Item) -> K,
    K: SameValue,
{
    let others = collect_others_by(others, &mut projector);
    Membership::new(source.into_iter(), projector, others, true)
}

/// Yields the source items for which `equals(item, other)` holds for some
/// item of `others`.
pub fn intersection_using<S, O, E>(
    source: S,
    others: O,
    equals: E,
) -> MembershipUsing<S::IntoIter, O::Item, E>
where
    S: IntoIterator,
    O: IntoIterator,
    E: FnMut(&S::Item, &O::Item) -> bool,
{
    MembershipUsing::new(source.into_iter(), others.into_iter().collect(), equals, true)
}

/// Concatenation of several sequences, deduplicated. See [`union`].
pub type Union<I> = Unique<Flatten<I>>;

/// Concatenates every input, then drops repeated items.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::union;
///
/// let result: Vec<i32> = union(vec![vec![1, 2], vec![2, 3], vec![]]).collect();
/// assert_eq!(result, vec![1, 2, 3]);
/// ```
pub fn union<S>(sources: S) -> Union<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Clone + SameValue,
{
    unique(sources.into_iter().flatten())
}
