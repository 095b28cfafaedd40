//! Sources: sequences built from nothing.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::generator::unfold;
//!
//! let fibonacci: Vec<u64> = unfold([0, 1], |previous, _| previous[0] + previous[1])
//!     .take(8)
//!     .collect();
//! assert_eq!(fibonacci, vec![0, 1, 1, 2, 3, 5, 8, 13]);
//! ```

use std::collections::VecDeque;
use std::iter::Empty;
use std::ops::{Range, RangeFrom};

/// A sequence that yields nothing.
#[must_use]
pub fn empty<T>() -> Empty<T> {
    std::iter::empty()
}

/// Turns any [`IntoIterator`] into its iterator.
#[must_use]
pub fn from<S: IntoIterator>(source: S) -> S::IntoIter {
    source.into_iter()
}

/// `start, start + 1, ...` without end.
#[must_use]
pub const fn integers(start: i64) -> RangeFrom<i64> {
    start..
}

/// `start, start + 1, ..., end - 1`.
#[must_use]
pub const fn integers_between(start: i64, end: i64) -> Range<i64> {
    start..end
}

/// An infinite sequence defined by its seeds and a recurrence. See
/// [`unfold`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Unfold<T, F> {
    window: VecDeque<T>,
    seed_count: usize,
    index: usize,
    generate_next: F,
}

impl<T, F> Iterator for Unfold<T, F>
where
    T: Clone,
    F: FnMut(&[T], usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.index;
        self.index += 1;
        if index < self.seed_count {
            return self.window.get(index).cloned();
        }
        let next = (self.generate_next)(self.window.make_contiguous(), index);
        self.window.push_back(next.clone());
        if self.window.len() > self.seed_count {
            self.window.pop_front();
        }
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Yields the seeds, then forever `generate_next(previous, index)`.
///
/// `previous` holds the last `k` values, oldest first, where `k` is the
/// number of seeds; `index` is the position of the value being generated.
/// Without seeds, `previous` is always empty.
pub fn unfold<T, S, F>(seeds: S, generate_next: F) -> Unfold<T, F>
where
    S: IntoIterator<Item = T>,
    T: Clone,
    F: FnMut(&[T], usize) -> T,
{
    let window: VecDeque<T> = seeds.into_iter().collect();
    Unfold {
        seed_count: window.len(),
        window,
        index: 0,
        generate_next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfold_single_seed() {
        let powers: Vec<u32> = unfold([1], |previous, _| previous[0] * 2).take(5).collect();
        assert_eq!(powers, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_unfold_without_seeds_uses_index() {
        let squares: Vec<usize> = unfold(Vec::new(), |previous: &[usize], index| {
            assert!(previous.is_empty());
            index * index
        })
        .take(4)
        .collect();
        assert_eq!(squares, vec![0, 1, 4, 9]);
    }

    #[test]
    fn test_integers() {
        assert_eq!(integers(-2).take(3).collect::<Vec<_>>(), vec![-2, -1, 0]);
        assert_eq!(integers_between(3, 6).collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(integers_between(6, 3).count(), 0);
    }

    #[test]
    fn test_empty_and_from() {
        assert_eq!(empty::<String>().count(), 0);
        assert_eq!(from(vec!['a']).next(), Some('a'));
    }
}
