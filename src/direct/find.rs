//! Single-item extraction.
//!
//! Every function comes in two flavours: the plain one returns `Option`, the
//! `_or_error` one returns `Result` with a [`SequenceError`] naming the
//! operation. Both stop pulling as soon as the answer is known, except the
//! `last`/`find_last` family, which has to drain the source.

use crate::error::SequenceError;

const fn not_found(operation: &'static str) -> SequenceError {
    SequenceError::NotFound { operation }
}

const fn empty(operation: &'static str) -> SequenceError {
    SequenceError::Empty { operation }
}

/// The first item, if any.
pub fn first<S: IntoIterator>(source: S) -> Option<S::Item> {
    source.into_iter().next()
}

/// The first item.
///
/// # Errors
///
/// [`SequenceError::Empty`] when the source yields nothing.
pub fn first_or_error<S: IntoIterator>(source: S) -> Result<S::Item, SequenceError> {
    first(source).ok_or_else(|| empty("first_or_error").traced())
}

/// The last item, if any.
pub fn last<S: IntoIterator>(source: S) -> Option<S::Item> {
    source.into_iter().last()
}

/// The last item.
///
/// # Errors
///
/// [`SequenceError::Empty`] when the source yields nothing.
pub fn last_or_error<S: IntoIterator>(source: S) -> Result<S::Item, SequenceError> {
    last(source).ok_or_else(|| empty("last_or_error").traced())
}

/// The item at zero-based position `n`, if the source is long enough.
pub fn nth<S: IntoIterator>(source: S, n: usize) -> Option<S::Item> {
    source.into_iter().nth(n)
}

/// The item at zero-based position `n`.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when the source has `n` items or fewer.
pub fn nth_or_error<S: IntoIterator>(source: S, n: usize) -> Result<S::Item, SequenceError> {
    nth(source, n).ok_or_else(|| not_found("nth_or_error").traced())
}

/// The first item matching the predicate, if any.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::find;
///
/// assert_eq!(find(vec![1, 4, 9, 16], |value, _| value % 2 == 0), Some(4));
/// assert_eq!(find(vec![1, 4, 9, 16], |_, index| index > 5), None);
/// ```
pub fn find<S, P>(source: S, mut predicate: P) -> Option<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(_, item)| item)
}

/// The first item matching the predicate.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when no item matches.
pub fn find_or_error<S, P>(source: S, predicate: P) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    find(source, predicate).ok_or_else(|| not_found("find_or_error").traced())
}

/// The index of the first item matching the predicate, if any.
pub fn find_index<S, P>(source: S, mut predicate: P) -> Option<usize>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(index, _)| index)
}

/// The index of the first item matching the predicate.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when no item matches.
pub fn find_index_or_error<S, P>(source: S, predicate: P) -> Result<usize, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    find_index(source, predicate).ok_or_else(|| not_found("find_index_or_error").traced())
}

/// The last item matching the predicate, if any. Drains the source.
pub fn find_last<S, P>(source: S, mut predicate: P) -> Option<S::Item>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index))
        .last()
        .map(|(_, item)| item)
}

/// The last item matching the predicate. Drains the source.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when no item matches.
pub fn find_last_or_error<S, P>(source: S, predicate: P) -> Result<S::Item, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    find_last(source, predicate).ok_or_else(|| not_found("find_last_or_error").traced())
}

/// The index of the last item matching the predicate, if any. Drains the
/// source.
pub fn find_last_index<S, P>(source: S, mut predicate: P) -> Option<usize>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index))
        .last()
        .map(|(index, _)| index)
}

/// The index of the last item matching the predicate. Drains the source.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when no item matches.
pub fn find_last_index_or_error<S, P>(source: S, predicate: P) -> Result<usize, SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    find_last_index(source, predicate)
        .ok_or_else(|| not_found("find_last_index_or_error").traced())
}

/// The first item matching the predicate, paired with its index.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::find_with_index;
///
/// assert_eq!(find_with_index("hello".chars(), |letter, _| *letter == 'l'), Some((2, 'l')));
/// ```
pub fn find_with_index<S, P>(source: S, mut predicate: P) -> Option<(usize, S::Item)>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
}

/// The first item matching the predicate, paired with its index.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when no item matches.
pub fn find_with_index_or_error<S, P>(
    source: S,
    predicate: P,
) -> Result<(usize, S::Item), SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    find_with_index(source, predicate).ok_or_else(|| not_found("find_with_index_or_error").traced())
}

/// The last item matching the predicate, paired with its index. Drains the
/// source.
pub fn find_last_with_index<S, P>(source: S, mut predicate: P) -> Option<(usize, S::Item)>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    source
        .into_iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index))
        .last()
}

/// The last item matching the predicate, paired with its index. Drains the
/// source.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when no item matches.
pub fn find_last_with_index_or_error<S, P>(
    source: S,
    predicate: P,
) -> Result<(usize, S::Item), SequenceError>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    find_last_with_index(source, predicate)
        .ok_or_else(|| not_found("find_last_with_index_or_error").traced())
}

/// The index of the first item equal to `value`, if any.
pub fn index_of<S>(source: S, value: &S::Item) -> Option<usize>
where
    S: IntoIterator,
    S::Item: PartialEq,
{
    source.into_iter().position(|item| item == *value)
}

/// The index of the first item equal to `value`.
///
/// # Errors
///
/// [`SequenceError::NotFound`] when no item is equal.
pub fn index_of_or_error<S>(source: S, value: &S::Item) -> Result<usize, SequenceError>
where
    S: IntoIterator,
    S::Item: PartialEq,
{
    index_of(source, value).ok_or_else(|| not_found("index_of_or_error").traced())
}

/// The only item of the source.
///
/// `None` when the source is empty or has more than one item. Stops pulling
/// at the second item.
pub fn get_single<S: IntoIterator>(source: S) -> Option<S::Item> {
    get_single_or_error(source).ok()
}

/// The only item of the source.
///
/// # Errors
///
/// [`SequenceError::Empty`] for an empty source, and
/// [`SequenceError::MoreThanOne`] as soon as a second item arrives. The rest
/// of the source is never pulled.
///
/// # Examples
///
/// ```rust
/// use seqpipe::SequenceError;
/// use seqpipe::direct::get_single_or_error;
///
/// assert_eq!(get_single_or_error(vec!['x']), Ok('x'));
/// assert_eq!(get_single_or_error(1..), Err(SequenceError::MoreThanOne));
/// ```
pub fn get_single_or_error<S: IntoIterator>(source: S) -> Result<S::Item, SequenceError> {
    let mut iterator = source.into_iter();
    let single = iterator
        .next()
        .ok_or_else(|| empty("get_single_or_error").traced())?;
    match iterator.next() {
        None => Ok(single),
        Some(_) => Err(SequenceError::MoreThanOne.traced()),
    }
}
