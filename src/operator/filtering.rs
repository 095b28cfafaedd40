use std::ops::RangeBounds;

use crate::direct::{
    self, Filter, FilterIndex, Skip, SkipUntil, Slice, TakeFirst, TakeWhile, WithoutLast,
};
use crate::error::SequenceError;

/// Operator form of [`direct::filter`].
pub fn filter<S, P>(predicate: P) -> impl Fn(S) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::filter(source, predicate.clone())
}

/// Operator form of [`direct::filter_index`].
pub fn filter_index<S, P>(predicate: P) -> impl Fn(S) -> FilterIndex<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::filter_index(source, predicate.clone())
}

/// Operator form of [`direct::take_while`].
pub fn take_while<S, P>(predicate: P) -> impl Fn(S) -> TakeWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::take_while(source, predicate.clone())
}

/// Operator form of [`direct::take_until`].
pub fn take_until<S, P>(predicate: P) -> impl Fn(S) -> TakeWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::take_until(source, predicate.clone())
}

/// Operator form of [`direct::take_first`].
pub fn take_first<S>(count: usize) -> impl Fn(S) -> TakeFirst<S::IntoIter>
where
    S: IntoIterator,
{
    move |source| direct::take_first(source, count)
}

/// Operator form of [`direct::without_last`].
pub fn without_last<S>() -> impl Fn(S) -> WithoutLast<S::IntoIter>
where
    S: IntoIterator,
{
    direct::without_last
}

/// Operator form of [`direct::skip_until`].
pub fn skip_until<S, P>(predicate: P) -> impl Fn(S) -> SkipUntil<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::skip_until(source, predicate.clone())
}

/// Operator form of [`direct::skip_while`].
pub fn skip_while<S, P>(predicate: P) -> impl Fn(S) -> SkipUntil<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::skip_while(source, predicate.clone())
}

/// Operator form of [`direct::skip`].
pub fn skip<S>(count: usize) -> impl Fn(S) -> Skip<S::IntoIter>
where
    S: IntoIterator,
{
    move |source| direct::skip(source, count)
}

/// Operator form of [`direct::slice`]. The range is checked here, once.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSliceRange`] when the range ends before
/// it starts.
///
/// # Examples
///
/// ```rust
/// use seqpipe::operator::slice;
///
/// let middle = slice(1..3).unwrap();
/// assert_eq!(middle("abcd".chars()).collect::<String>(), "bc");
/// assert_eq!(middle("x".chars()).count(), 0);
/// ```
pub fn slice<S, R>(range: R) -> Result<impl Fn(S) -> Slice<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
    R: RangeBounds<usize>,
{
    let (start, end) = direct::slice_bounds(&range)?;
    Ok(move |source: S| Slice::new(source.into_iter(), start, end))
}
