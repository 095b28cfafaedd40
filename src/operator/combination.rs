use std::iter::Chain;

use crate::direct::{self, Concat, JoinWith, Zip, ZipPair, ZipPairStrict, ZipStrict};

/// Operator form of [`direct::concat`]. `others` is cloned for every source.
pub fn concat<S, O>(others: O) -> impl Fn(S) -> Concat<S::IntoIter, O::IntoIter>
where
    S: IntoIterator,
    O: IntoIterator + Clone,
    O::Item: IntoIterator<Item = S::Item>,
{
    move |source| direct::concat(source, others.clone())
}

/// Operator form of [`direct::start_with`].
pub fn start_with<S, V>(values: V) -> impl Fn(S) -> Chain<V::IntoIter, S::IntoIter>
where
    S: IntoIterator,
    V: IntoIterator<Item = S::Item> + Clone,
{
    move |source| direct::start_with(source, values.clone())
}

/// Operator form of [`direct::end_with`].
pub fn end_with<S, V>(values: V) -> impl Fn(S) -> Chain<S::IntoIter, V::IntoIter>
where
    S: IntoIterator,
    V: IntoIterator<Item = S::Item> + Clone,
{
    move |source| direct::end_with(source, values.clone())
}

/// Operator form of [`direct::join_with`].
pub fn join_with<S>(separator: S::Item) -> impl Fn(S) -> JoinWith<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    move |source| direct::join_with(source, separator.clone())
}

/// Operator form of [`direct::zip`]. `others` is cloned for every source.
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipe;
/// use seqpipe::ender::to_vec;
/// use seqpipe::operator::zip;
///
/// let rows = pipe!(vec![1, 2, 3, 4], zip([vec![5, 6]]), to_vec());
/// let second: Vec<Option<i32>> = rows.iter().map(|row| row[1]).collect();
/// assert_eq!(second, vec![Some(5), Some(6), None, None]);
/// ```
pub fn zip<S, O>(others: O) -> impl Fn(S) -> Zip<S::IntoIter, <O::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    O: IntoIterator + Clone,
    O::Item: IntoIterator<Item = S::Item>,
{
    move |source| direct::zip(source, others.clone())
}

/// Operator form of [`direct::zip_strict`]. `others` is cloned for every
/// source.
pub fn zip_strict<S, O>(
    others: O,
) -> impl Fn(S) -> ZipStrict<S::IntoIter, <O::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    O: IntoIterator + Clone,
    O::Item: IntoIterator<Item = S::Item>,
{
    move |source| direct::zip_strict(source, others.clone())
}

/// Operator form of [`direct::zip_pair`].
pub fn zip_pair<S, T>(other: T) -> impl Fn(S) -> ZipPair<S::IntoIter, T::IntoIter>
where
    S: IntoIterator,
    T: IntoIterator + Clone,
{
    move |source| direct::zip_pair(source, other.clone())
}

/// Operator form of [`direct::zip_pair_strict`].
pub fn zip_pair_strict<S, T>(other: T) -> impl Fn(S) -> ZipPairStrict<S::IntoIter, T::IntoIter>
where
    S: IntoIterator,
    T: IntoIterator + Clone,
{
    move |source| direct::zip_pair_strict(source, other.clone())
}
