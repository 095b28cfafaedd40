use crate::direct;
use crate::error::SequenceError;

/// Ender form of [`direct::first`].
pub fn first<S: IntoIterator>() -> impl Fn(S) -> Option<S::Item> {
    direct::first
}

/// Ender form of [`direct::first_or_error`].
pub fn first_or_error<S: IntoIterator>() -> impl Fn(S) -> Result<S::Item, SequenceError> {
    direct::first_or_error
}

/// Ender form of [`direct::last`].
pub fn last<S: IntoIterator>() -> impl Fn(S) -> Option<S::Item> {
    direct::last
}

/// Ender form of [`direct::last_or_error`].
pub fn last_or_error<S: IntoIterator>() -> impl Fn(S) -> Result<S::Item, SequenceError> {
    direct::last_or_error
}

/// Ender form of [`direct::nth`].
pub fn nth<S: IntoIterator>(n: usize) -> impl Fn(S) -> Option<S::Item> {
    move |source| direct::nth(source, n)
}

/// Ender form of [`direct::nth_or_error`].
pub fn nth_or_error<S: IntoIterator>(n: usize) -> impl Fn(S) -> Result<S::Item, SequenceError> {
    move |source| direct::nth_or_error(source, n)
}

/// Ender form of [`direct::find`].
pub fn find<S, P>(predicate: P) -> impl Fn(S) -> Option<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find(source, predicate.clone())
}

/// Ender form of [`direct::find_or_error`].
pub fn find_or_error<S, P>(predicate: P) -> impl Fn(S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_or_error(source, predicate.clone())
}

/// Ender form of [`direct::find_index`].
pub fn find_index<S, P>(predicate: P) -> impl Fn(S) -> Option<usize>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_index(source, predicate.clone())
}

/// Ender form of [`direct::find_index_or_error`].
pub fn find_index_or_error<S, P>(predicate: P) -> impl Fn(S) -> Result<usize, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_index_or_error(source, predicate.clone())
}

/// Ender form of [`direct::find_last`].
pub fn find_last<S, P>(predicate: P) -> impl Fn(S) -> Option<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_last(source, predicate.clone())
}

/// Ender form of [`direct::find_last_or_error`].
pub fn find_last_or_error<S, P>(predicate: P) -> impl Fn(S) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_last_or_error(source, predicate.clone())
}

/// Ender form of [`direct::find_last_index`].
pub fn find_last_index<S, P>(predicate: P) -> impl Fn(S) -> Option<usize>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_last_index(source, predicate.clone())
}

/// Ender form of [`direct::find_last_index_or_error`].
pub fn find_last_index_or_error<S, P>(predicate: P) -> impl Fn(S) -> Result<usize, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_last_index_or_error(source, predicate.clone())
}

/// Ender form of [`direct::find_with_index`].
pub fn find_with_index<S, P>(predicate: P) -> impl Fn(S) -> Option<(usize, S::Item)>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_with_index(source, predicate.clone())
}

/// Ender form of [`direct::find_with_index_or_error`].
pub fn find_with_index_or_error<S, P>(
    predicate: P,
) -> impl Fn(S) -> Result<(usize, S::Item), SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_with_index_or_error(source, predicate.clone())
}

/// Ender form of [`direct::find_last_with_index`].
pub fn find_last_with_index<S, P>(predicate: P) -> impl Fn(S) -> Option<(usize, S::Item)>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_last_with_index(source, predicate.clone())
}

/// Ender form of [`direct::find_last_with_index_or_error`].
pub fn find_last_with_index_or_error<S, P>(
    predicate: P,
) -> impl Fn(S) -> Result<(usize, S::Item), SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool + Clone,
{
    move |source| direct::find_last_with_index_or_error(source, predicate.clone())
}

/// Ender form of [`direct::index_of`]. The ender owns `value`.
pub fn index_of<S>(value: S::Item) -> impl Fn(S) -> Option<usize>
where
    S: IntoIterator,
    S::Item: PartialEq,
{
    move |source| direct::index_of(source, &value)
}

/// Ender form of [`direct::index_of_or_error`]. The ender owns `value`.
pub fn index_of_or_error<S>(value: S::Item) -> impl Fn(S) -> Result<usize, SequenceError>
where
    S: IntoIterator,
    S::Item: PartialEq,
{
    move |source| direct::index_of_or_error(source, &value)
}

/// Ender form of [`direct::get_single`].
pub fn get_single<S: IntoIterator>() -> impl Fn(S) -> Option<S::Item> {
    direct::get_single
}

/// Ender form of [`direct::get_single_or_error`].
///
/// # Examples
///
/// ```rust
/// use seqpipe::{SequenceError, pipe};
/// use seqpipe::ender::get_single_or_error;
/// use seqpipe::operator::filter;
///
/// let only_negative = pipe!(vec![3, -1, 4], filter(|value: &i32, _| *value < 0), get_single_or_error());
/// assert_eq!(only_negative, Ok(-1));
///
/// let single = get_single_or_error();
/// assert_eq!(single(0..), Err(SequenceError::MoreThanOne));
/// ```
pub fn get_single_or_error<S: IntoIterator>() -> impl Fn(S) -> Result<S::Item, SequenceError> {
    direct::get_single_or_error
}
