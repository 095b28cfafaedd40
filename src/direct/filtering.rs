//! Filtering and slicing: `filter`, the take/skip family and `slice`.
//!
//! Every adapter here is lazy and single-pass. The take family stops pulling
//! from its source as soon as its outcome is decided, so it is safe on
//! infinite sources.

use std::iter::Fuse;
use std::ops::{Bound, RangeBounds};

use crate::error::SequenceError;

/// Yields the items for which the predicate holds. See [`filter`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iterator: I,
    predicate: P,
    index: usize,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iterator.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iterator.size_hint().1)
    }
}

/// Yields `item` iff `predicate(item, index)` is true.
///
/// The index counts every item seen, not only the yielded ones.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::filter;
///
/// let result: Vec<char> = filter("abcdef".chars(), |_, index| index % 2 == 0).collect();
/// assert_eq!(result, vec!['a', 'c', 'e']);
/// ```
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    Filter {
        iterator: source.into_iter(),
        predicate,
        index: 0,
    }
}

/// Yields the indices of matching items. See [`filter_index`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FilterIndex<I, P> {
    iterator: I,
    predicate: P,
    index: usize,
}

impl<I, P> Iterator for FilterIndex<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for item in self.iterator.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(index);
            }
        }
        None
    }
}

/// Yields the zero-based index of every item satisfying the predicate.
pub fn filter_index<S, P>(source: S, predicate: P) -> FilterIndex<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    FilterIndex {
        iterator: source.into_iter(),
        predicate,
        index: 0,
    }
}

/// Yields items while the predicate result equals `expected`.
///
/// Backs both [`take_while`] (`expected == true`) and [`take_until`]
/// (`expected == false`).
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    iterator: I,
    predicate: P,
    index: usize,
    expected: bool,
    done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iterator.next()?;
        let index = self.index;
        self.index += 1;
        if (self.predicate)(&item, index) == self.expected {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iterator.size_hint().1)
        }
    }
}

/// Yields items until the predicate first fails, then stops.
///
/// Exactly one item past the last yielded one is pulled from the source
/// (the one that failed the predicate), never more.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::take_while;
///
/// let source = vec![-4, -6, -1, 6, -7, -5, 3, 1];
/// let result: Vec<i32> = take_while(source, |value, _| *value < 0).collect();
/// assert_eq!(result, vec![-4, -6, -1]);
/// ```
pub fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    TakeWhile {
        iterator: source.into_iter(),
        predicate,
        index: 0,
        expected: true,
        done: false,
    }
}

/// Yields items until the predicate first holds; `take_while` of the negation.
pub fn take_until<S, P>(source: S, predicate: P) -> TakeWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    TakeWhile {
        iterator: source.into_iter(),
        predicate,
        index: 0,
        expected: false,
        done: false,
    }
}

/// Yields at most `count` items. See [`take_first`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct TakeFirst<I> {
    iterator: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for TakeFirst<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.iterator.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iterator.size_hint();
        (
            lower.min(self.remaining),
            Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))),
        )
    }
}

/// Yields the first `count` items.
///
/// Produces the same items as `take_while(|_, index| index < count)`, but
/// stops without pulling the item at position `count`. A negative count is
/// unrepresentable, so this never fails.
pub fn take_first<S>(source: S, count: usize) -> TakeFirst<S::IntoIter>
where
    S: IntoIterator,
{
    TakeFirst {
        iterator: source.into_iter(),
        remaining: count,
    }
}

/// Yields every item but the last. See [`without_last`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct WithoutLast<I: Iterator> {
    iterator: Fuse<I>,
    pending: Option<I::Item>,
}

impl<I: Iterator> Iterator for WithoutLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_none() {
            self.pending = self.iterator.next();
        }
        let following = self.iterator.next()?;
        self.pending.replace(following)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let held = usize::from(self.pending.is_some());
        let (lower, upper) = self.iterator.size_hint();
        (
            lower.saturating_add(held).saturating_sub(1),
            upper.and_then(|upper| upper.checked_add(held)).map(|total| total.saturating_sub(1)),
        )
    }
}

/// Yields every item except the last one.
///
/// One item is held back at a time, so the source is pulled at most one
/// item ahead of the output and infinite sources work.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::without_last;
///
/// assert_eq!(without_last(vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(without_last(vec!['x']).count(), 0);
/// ```
pub fn without_last<S>(source: S) -> WithoutLast<S::IntoIter>
where
    S: IntoIterator,
{
    WithoutLast {
        iterator: source.into_iter().fuse(),
        pending: None,
    }
}

/// Discards items until the predicate result first equals `expected`.
///
/// Backs [`skip_until`] (`expected == true`) and [`skip_while`]
/// (`expected == false`). After the flip the predicate is never called again.
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct SkipUntil<I, P> {
    iterator: I,
    predicate: P,
    index: usize,
    expected: bool,
    flipped: bool,
}

impl<I, P> Iterator for SkipUntil<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.flipped {
            return self.iterator.next();
        }
        for item in self.iterator.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) == self.expected {
                self.flipped = true;
                return Some(item);
            }
        }
        None
    }
}

/// Discards items until the predicate first holds; that item and all the
/// following ones pass through.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::skip_until;
///
/// let result: Vec<i32> = skip_until(vec![1, 2, 3, 1, 2], |value, _| *value == 3).collect();
/// assert_eq!(result, vec![3, 1, 2]);
/// ```
pub fn skip_until<S, P>(source: S, predicate: P) -> SkipUntil<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    SkipUntil {
        iterator: source.into_iter(),
        predicate,
        index: 0,
        expected: true,
        flipped: false,
    }
}

/// Discards items while the predicate holds; `skip_until` of the negation.
pub fn skip_while<S, P>(source: S, predicate: P) -> SkipUntil<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    SkipUntil {
        iterator: source.into_iter(),
        predicate,
        index: 0,
        expected: false,
        flipped: false,
    }
}

/// Discards the first `count` items. See [`skip`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Skip<I> {
    iterator: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.iterator.next()?;
        }
        self.iterator.next()
    }
}

/// Discards the first `count` items; equivalent to
/// `skip_until(|_, index| index >= count)`.
pub fn skip<S>(source: S, count: usize) -> Skip<S::IntoIter>
where
    S: IntoIterator,
{
    Skip {
        iterator: source.into_iter(),
        remaining: count,
    }
}

/// Yields the items whose index lies in `[start, end)`. See [`slice`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Slice<I> {
    iterator: I,
    index: usize,
    start: usize,
    end: Option<usize>,
}

impl<I> Slice<I> {
    pub(crate) const fn new(iterator: I, start: usize, end: Option<usize>) -> Self {
        Self {
            iterator,
            index: 0,
            start,
            end,
        }
    }
}

impl<I: Iterator> Iterator for Slice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.end.is_some_and(|end| self.index >= end) {
                return None;
            }
            let item = self.iterator.next()?;
            let index = self.index;
            self.index += 1;
            if index >= self.start {
                return Some(item);
            }
        }
    }
}

/// Resolves a range into `(start, end)`, rejecting `end < start`.
pub(crate) fn slice_bounds<R>(range: &R) -> Result<(usize, Option<usize>), SequenceError>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => Some(end.saturating_add(1)),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => None,
    };
    match end {
        Some(end) if end < start => Err(SequenceError::InvalidSliceRange { start, end }.traced()),
        _ => Ok((start, end)),
    }
}

/// Yields the items whose zero-based index lies in `range`.
///
/// Fails before iterating when the range ends before it starts. Indices past
/// the end of the source are simply never reached, and nothing is pulled
/// once the end index is reached.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSliceRange`] when `end < start`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::slice;
///
/// let result: String = slice("abcdefgh".chars(), 2..5).unwrap().collect();
/// assert_eq!(result, "cde");
/// let everything: String = slice("abc".chars(), ..).unwrap().collect();
/// assert_eq!(everything, "abc");
/// ```
pub fn slice<S, R>(source: S, range: R) -> Result<Slice<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
    R: RangeBounds<usize>,
{
    let (start, end) = slice_bounds(&range)?;
    Ok(Slice::new(source.into_iter(), start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_filter_index_counts_rejected_items() {
        let kept: Vec<i32> = filter(vec![5, 6, 7, 8], |_, index| index > 1).collect();
        assert_eq!(kept, vec![7, 8]);
        let indices: Vec<usize> = filter_index(vec![5, 6, 7, 8], |value, _| value % 2 == 0).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_take_while_visits_one_past_stop() {
        let visited = RefCell::new(Vec::new());
        let source = vec![-4, -6, -1, 6, -7, -5, 3, 1];
        let result: Vec<i32> = take_while(source, |value: &i32, _| {
            visited.borrow_mut().push(*value);
            *value < 0
        })
        .collect();
        assert_eq!(result, vec![-4, -6, -1]);
        assert_eq!(*visited.borrow(), vec![-4, -6, -1, 6]);
    }

    #[test]
    fn test_take_first_does_not_pull_past_count() {
        let pulled = RefCell::new(0);
        let source = (0..).inspect(|_| *pulled.borrow_mut() += 1);
        let result: Vec<i32> = take_first(source, 3).collect();
        assert_eq!(result, vec![0, 1, 2]);
        assert_eq!(*pulled.borrow(), 3);
    }

    #[test]
    fn test_without_last_pulls_one_ahead() {
        let pulled = RefCell::new(0);
        let mut rest = without_last((0..).inspect(|_| *pulled.borrow_mut() += 1));
        assert_eq!(rest.next(), Some(0));
        assert_eq!(*pulled.borrow(), 2);
        assert_eq!(rest.next(), Some(1));
        assert_eq!(*pulled.borrow(), 3);
    }

    #[test]
    fn test_without_last_size_hint() {
        let mut rest = without_last(vec![1, 2, 3]);
        assert_eq!(rest.size_hint(), (2, Some(2)));
        rest.next();
        assert_eq!(rest.size_hint(), (1, Some(1)));
        assert_eq!(without_last(Vec::<u8>::new()).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_skip_until_stops_calling_predicate_after_flip() {
        let calls = RefCell::new(0);
        let result: Vec<i32> = skip_until(vec![1, 2, 3, 4, 5], |value: &i32, _| {
            *calls.borrow_mut() += 1;
            *value == 2
        })
        .collect();
        assert_eq!(result, vec![2, 3, 4, 5]);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_slice_rejects_reversed_range() {
        let start = 4;
        let end = 2;
        assert_eq!(
            slice(vec![1, 2, 3], start..end).err(),
            Some(SequenceError::InvalidSliceRange { start: 4, end: 2 })
        );
    }

    #[test]
    fn test_slice_inclusive_range() {
        let result: Vec<i32> = slice(0..10, 2..=4).unwrap().collect();
        assert_eq!(result, vec![2, 3, 4]);
    }

    #[test]
    fn test_skip_more_than_available() {
        assert_eq!(skip(vec![1, 2], 5).next(), None);
    }
}
