//! Combining sequences: `concat`, `start_with`/`end_with`, `join_with` and
//! the zip family.

use std::iter::{Chain, Flatten, Fuse};

use crate::error::SequenceError;

/// The source followed by every other sequence. See [`concat`].
pub type Concat<I, O> = Chain<I, Flatten<O>>;

/// Yields the source fully, then each of `others` fully, in order.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::concat;
///
/// let result: Vec<i32> = concat(vec![1, 2], vec![vec![3], vec![], vec![4, 5]]).collect();
/// assert_eq!(result, vec![1, 2, 3, 4, 5]);
/// ```
pub fn concat<S, O>(source: S, others: O) -> Concat<S::IntoIter, O::IntoIter>
where
    S: IntoIterator,
    O: IntoIterator,
    O::Item: IntoIterator<Item = S::Item>,
{
    source.into_iter().chain(others.into_iter().flatten())
}

/// Yields `values` before the source.
pub fn start_with<S, V>(source: S, values: V) -> Chain<V::IntoIter, S::IntoIter>
where
    S: IntoIterator,
    V: IntoIterator<Item = S::Item>,
{
    values.into_iter().chain(source)
}

/// Yields `values` after the source.
pub fn end_with<S, V>(source: S, values: V) -> Chain<S::IntoIter, V::IntoIter>
where
    S: IntoIterator,
    V: IntoIterator<Item = S::Item>,
{
    source.into_iter().chain(values)
}

/// Interleaves a separator between items. See [`join_with`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct JoinWith<I: Iterator> {
    iterator: Fuse<I>,
    separator: I::Item,
    pending: Option<I::Item>,
    started: bool,
}

impl<I> Iterator for JoinWith<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        let item = self.iterator.next()?;
        if !self.started {
            self.started = true;
            return Some(item);
        }
        self.pending = Some(item);
        Some(self.separator.clone())
    }
}

/// Yields `separator` between every two consecutive items.
///
/// The separator is only yielded once the following item is known to exist.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::join_with;
///
/// let result: String = join_with("abc".chars(), '-').collect();
/// assert_eq!(result, "a-b-c");
/// ```
pub fn join_with<S>(source: S, separator: S::Item) -> JoinWith<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    JoinWith {
        iterator: source.into_iter().fuse(),
        separator,
        pending: None,
        started: false,
    }
}

/// Position-wise rows of several sequences, padded with `None`. See [`zip`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Zip<I, J> {
    source: Fuse<I>,
    others: Vec<Fuse<J>>,
}

impl<T, I, J> Iterator for Zip<I, J>
where
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
{
    type Item = Vec<Option<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut row = Vec::with_capacity(self.others.len() + 1);
        row.push(self.source.next());
        row.extend(self.others.iter_mut().map(Iterator::next));
        row.iter().any(Option::is_some).then_some(row)
    }
}

/// Yields one row per position until every input is exhausted.
///
/// Row `n` holds the `n`-th item of the source, then of each of `others`;
/// inputs that already ended contribute `None`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::zip;
///
/// let rows: Vec<Vec<Option<i32>>> = zip(vec![1, 2], vec![vec![10]]).collect();
/// assert_eq!(rows, vec![vec![Some(1), Some(10)], vec![Some(2), None]]);
/// ```
pub fn zip<S, O>(source: S, others: O) -> Zip<S::IntoIter, <O::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    O: IntoIterator,
    O::Item: IntoIterator<Item = S::Item>,
{
    Zip {
        source: source.into_iter().fuse(),
        others: others
            .into_iter()
            .map(|other| other.into_iter().fuse())
            .collect(),
    }
}

/// Position-wise rows of equally long sequences. See [`zip_strict`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct ZipStrict<I, J> {
    source: I,
    others: Vec<J>,
    finished: bool,
}

impl<T, I, J> Iterator for ZipStrict<I, J>
where
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
{
    type Item = Result<Vec<T>, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let first = self.source.next();
        let exhausted = first.is_none();
        let rest: Vec<Option<T>> = self.others.iter_mut().map(Iterator::next).collect();
        if rest.iter().any(|item| item.is_none() != exhausted) {
            self.finished = true;
            return Some(Err(SequenceError::LengthMismatch.traced()));
        }
        if exhausted {
            self.finished = true;
            return None;
        }
        std::iter::once(first)
            .chain(rest)
            .collect::<Option<Vec<T>>>()
            .map(Ok)
    }
}

/// Like [`zip`], but all inputs must have the same length.
///
/// Rows are yielded as `Ok` until the first position where some inputs are
/// exhausted and others are not; that position yields
/// [`SequenceError::LengthMismatch`] and ends the sequence.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::zip_strict;
///
/// let rows: Result<Vec<Vec<i32>>, _> = zip_strict(vec![1, 2, 3], vec![vec![4, 5]]).collect();
/// assert!(rows.is_err());
/// ```
pub fn zip_strict<S, O>(
    source: S,
    others: O,
) -> ZipStrict<S::IntoIter, <O::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    O: IntoIterator,
    O::Item: IntoIterator<Item = S::Item>,
{
    ZipStrict {
        source: source.into_iter(),
        others: others.into_iter().map(IntoIterator::into_iter).collect(),
        finished: false,
    }
}

/// Pairs of two differently typed sequences. See [`zip_pair`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct ZipPair<I, J> {
    left: Fuse<I>,
    right: Fuse<J>,
}

impl<I: Iterator, J: Iterator> Iterator for ZipPair<I, J> {
    type Item = (Option<I::Item>, Option<J::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.next(), self.right.next()) {
            (None, None) => None,
            pair => Some(pair),
        }
    }
}

/// Two-input [`zip`] with independent item types.
pub fn zip_pair<S, T>(source: S, other: T) -> ZipPair<S::IntoIter, T::IntoIter>
where
    S: IntoIterator,
    T: IntoIterator,
{
    ZipPair {
        left: source.into_iter().fuse(),
        right: other.into_iter().fuse(),
    }
}

/// Strict pairs of two differently typed sequences. See [`zip_pair_strict`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct ZipPairStrict<I, J> {
    left: I,
    right: J,
    finished: bool,
}

impl<I: Iterator, J: Iterator> Iterator for ZipPairStrict<I, J> {
    type Item = Result<(I::Item, J::Item), SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match (self.left.next(), self.right.next()) {
            (Some(left), Some(right)) => Some(Ok((left, right))),
            (None, None) => {
                self.finished = true;
                None
            }
            _ => {
                self.finished = true;
                Some(Err(SequenceError::LengthMismatch.traced()))
            }
        }
    }
}

/// Two-input [`zip_strict`] with independent item types.
pub fn zip_pair_strict<S, T>(source: S, other: T) -> ZipPairStrict<S::IntoIter, T::IntoIter>
where
    S: IntoIterator,
    T: IntoIterator,
{
    ZipPairStrict {
        left: source.into_iter(),
        right: other.into_iter(),
        finished: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_zip_pads_shorter_inputs() {
        let rows: Vec<(Option<i32>, Option<char>)> = zip_pair(vec![1, 2, 3, 4], vec!['a', 'b']).collect();
        let second: Vec<Option<char>> = rows.iter().map(|row| row.1).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(second, vec![Some('a'), Some('b'), None, None]);
    }

    #[rstest]
    fn test_zip_pair_strict_rejects_uneven_inputs() {
        let rows: Result<Vec<(i32, char)>, SequenceError> =
            zip_pair_strict(vec![1, 2, 3, 4], vec!['a', 'b']).collect();
        assert_eq!(rows, Err(SequenceError::LengthMismatch));
    }

    #[rstest]
    fn test_zip_strict_yields_rows_before_mismatch() {
        let mut rows = zip_strict(vec![1, 2], vec![vec![3], vec![5, 6]]);
        assert_eq!(rows.next(), Some(Ok(vec![1, 3, 5])));
        assert_eq!(rows.next(), Some(Err(SequenceError::LengthMismatch)));
        assert_eq!(rows.next(), None);
    }

    #[rstest]
    fn test_zip_strict_equal_lengths() {
        let rows: Result<Vec<Vec<i32>>, SequenceError> =
            zip_strict(vec![1, 2], vec![vec![3, 4]]).collect();
        assert_eq!(rows, Ok(vec![vec![1, 3], vec![2, 4]]));
    }

    #[rstest]
    fn test_zip_longer_other() {
        let rows: Vec<Vec<Option<i32>>> = zip(vec![1], vec![vec![2, 3]]).collect();
        assert_eq!(rows, vec![vec![Some(1), Some(2)], vec![None, Some(3)]]);
    }

    #[rstest]
    fn test_zip_without_others_wraps_source() {
        let rows: Vec<Vec<Option<i32>>> = zip(vec![7, 8], Vec::<Vec<i32>>::new()).collect();
        assert_eq!(rows, vec![vec![Some(7)], vec![Some(8)]]);
    }

    #[rstest]
    #[case(vec![], "")]
    #[case(vec!["a"], "a")]
    #[case(vec!["a", "b", "c"], "a, b, c")]
    fn test_join_with(#[case] source: Vec<&str>, #[case] expected: &str) {
        let joined: String = join_with(source, ", ").collect();
        assert_eq!(joined, expected);
    }

    #[rstest]
    fn test_start_and_end_with() {
        let result: Vec<i32> = end_with(start_with(vec![2, 3], [0, 1]), [4]).collect();
        assert_eq!(result, vec![0, 1, 2, 3, 4]);
    }
}
