use std::iter::{Chain, Flatten};
use std::sync::Arc;

use crate::direct::{
    self, Membership, MembershipUsing, SortedUnique, SortedUniqueBy, Unique, UniqueBy,
    clone_item, collect_others, collect_others_by,
};
use crate::same_value::SameValue;

/// Operator form of [`direct::unique`].
pub fn unique<S>() -> impl Fn(S) -> Unique<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone + SameValue,
{
    direct::unique
}

/// Operator form of [`direct::unique_by`].
pub fn unique_by<S, K, F>(projector: F) -> impl Fn(S) -> UniqueBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K + Clone,
    K: SameValue,
{
    move |source| direct::unique_by(source, projector.clone())
}

/// Operator form of [`direct::sorted_unique`].
pub fn sorted_unique<S>() -> impl Fn(S) -> SortedUnique<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone + SameValue,
{
    direct::sorted_unique
}

/// Operator form of [`direct::sorted_unique_by`].
pub fn sorted_unique_by<S, K, F>(projector: F) -> impl Fn(S) -> SortedUniqueBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K + Clone,
    K: SameValue,
{
    move |source| direct::sorted_unique_by(source, projector.clone())
}

/// Operator form of [`direct::difference`].
///
/// `others` is collected once, when the operator is built, and shared by
/// every application.
///
/// # Examples
///
/// ```rust
/// use seqpipe::operator::difference;
///
/// let without_vowels = difference("aeiou".chars());
/// assert_eq!(without_vowels("sequence".chars()).collect::<String>(), "sqnc");
/// assert_eq!(without_vowels("rhythm".chars()).collect::<String>(), "rhythm");
/// ```
pub fn difference<S, O>(
    others: O,
) -> impl Fn(S) -> Membership<S::IntoIter, fn(&O::Item) -> O::Item, O::Item>
where
    S: IntoIterator<Item = O::Item>,
    O: IntoIterator,
    O::Item: Clone + SameValue,
{
    let others = collect_others(others);
    move |source| {
        Membership::new(
            source.into_iter(),
            clone_item as fn(&O::Item) -> O::Item,
            Arc::clone(&others),
            false,
        )
    }
}

/// Operator form of [`direct::difference_by`]. `others` is projected and
/// collected once, when the operator is built.
pub fn difference_by<S, O, K, F>(others: O, projector: F) -> impl Fn(S) -> Membership<S::IntoIter, F, K>
where
    S: IntoIterator<Item = O::Item>,
    O: IntoIterator,
    F: FnMut(&O::Item) -> K + Clone,
    K: SameValue,
{
    let mut projector = projector;
    let others = collect_others_by(others, &mut projector);
    move |source| Membership::new(source.into_iter(), projector.clone(), Arc::clone(&others), false)
}

/// Operator form of [`direct::difference_using`]. `others` is collected
/// once, when the operator is built.
pub fn difference_using<S, O, E>(
    others: O,
    equals: E,
) -> impl Fn(S) -> MembershipUsing<S::IntoIter, O::Item, E>
where
    S: IntoIterator,
    O: IntoIterator,
    E: FnMut(&S::Item, &O::Item) -> bool + Clone,
{
    let others: Arc<[O::Item]> = others.into_iter().collect();
    move |source| {
        MembershipUsing::new(source.into_iter(), Arc::clone(&others), equals.clone(), false)
    }
}

/// Operator form of [`direct::intersection`]. `others` is collected once,
/// when the operator is built.
pub fn intersection<S, O>(
    others: O,
) -> impl Fn(S) -> Membership<S::IntoIter, fn(&O::Item) -> O::Item, O::Item>
where
    S: IntoIterator<Item = O::Item>,
    O: IntoIterator,
    O::Item: Clone + SameValue,
{
    let others = collect_others(others);
    move |source| {
        Membership::new(
            source.into_iter(),
            clone_item as fn(&O::Item) -> O::Item,
            Arc::clone(&others),
            true,
        )
    }
}

/// Operator form of [`direct::intersection_by`]. `others` is projected and
/// collected once, when the operator is built.
pub fn intersection_by<S, O, K, F>(others: O, projector: F) -> impl Fn(S) -> Membership<S::IntoIter, F, K>
where
    S: IntoIterator<Item = O::Item>,
    O: IntoIterator,
    F: FnMut(&O::Item) -> K + Clone,
    K: SameValue,
{
    let mut projector = projector;
    let others = collect_others_by(others, &mut projector);
    move |source| Membership::new(source.into_iter(), projector.clone(), Arc::clone(&others), true)
}

/// Operator form of [`direct::intersection_using`]. `others` is collected
/// once, when the operator is built.
pub fn intersection_using<S, O, E>(
    others: O,
    equals: E,
) -> impl Fn(S) -> MembershipUsing<S::IntoIter, O::Item, E>
where
    S: IntoIterator,
    O: IntoIterator,
    E: FnMut(&S::Item, &O::Item) -> bool + Clone,
{
    let others: Arc<[O::Item]> = others.into_iter().collect();
    move |source| {
        MembershipUsing::new(source.into_iter(), Arc::clone(&others), equals.clone(), true)
    }
}

/// The source followed by every one of `others`, deduplicated.
///
/// The operator form of [`direct::union`], with the source as the first
/// input.
///
/// # Examples
///
/// ```rust
/// use seqpipe::operator::union;
///
/// let with_defaults = union(vec![vec![80, 443]]);
/// assert_eq!(with_defaults(vec![443, 8080]).collect::<Vec<_>>(), vec![443, 8080, 80]);
/// ```
pub fn union<S, O>(others: O) -> impl Fn(S) -> Unique<Chain<S::IntoIter, Flatten<O::IntoIter>>>
where
    S: IntoIterator,
    S::Item: Clone + SameValue,
    O: IntoIterator + Clone,
    O::Item: IntoIterator<Item = S::Item>,
{
    move |source| direct::unique(direct::concat(source, others.clone()))
}
