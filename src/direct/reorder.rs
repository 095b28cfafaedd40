//! Reordering. Everything here is eager: the source is materialized when
//! the function is called, before the first item is yielded.

use std::cmp::Ordering;
use std::vec;

/// Direction of [`sort_by_key`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

fn materialize<S: IntoIterator>(source: S, operation: &'static str) -> Vec<S::Item> {
    let items: Vec<S::Item> = source.into_iter().collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(operation, length = items.len(), "materialized source");
    #[cfg(not(feature = "tracing"))]
    let _ = operation;
    items
}

/// Sorts ascending. Stable.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::sort;
///
/// assert_eq!(sort(vec![3, 1, 2]).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn sort<S>(source: S) -> vec::IntoIter<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    let mut items = materialize(source, "sort");
    items.sort();
    items.into_iter()
}

/// Sorts with a comparator. Stable.
pub fn sort_by<S, F>(source: S, compare: F) -> vec::IntoIter<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut items = materialize(source, "sort_by");
    items.sort_by(compare);
    items.into_iter()
}

/// Sorts by a key in the given [`Order`]. Stable in both directions: items
/// with equal keys keep their source order.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::{Order, sort_by_key};
///
/// let words = vec!["bb", "a", "ccc", "dd"];
/// let result: Vec<&str> = sort_by_key(words, |word| word.len(), Order::Descending).collect();
/// assert_eq!(result, vec!["ccc", "bb", "dd", "a"]);
/// ```
pub fn sort_by_key<S, K, F>(source: S, mut key: F, order: Order) -> vec::IntoIter<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Ord,
{
    let mut items = materialize(source, "sort_by_key");
    match order {
        Order::Ascending => items.sort_by_key(key),
        Order::Descending => items.sort_by(|left, right| key(right).cmp(&key(left))),
    }
    items.into_iter()
}

/// Yields the items in reverse order.
pub fn reverse<S>(source: S) -> vec::IntoIter<S::Item>
where
    S: IntoIterator,
{
    let mut items = materialize(source, "reverse");
    items.reverse();
    items.into_iter()
}

/// Which pairs [`pairs`] yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairOptions {
    /// Yield both `(a, b)` and `(b, a)`.
    pub order_important: bool,
    /// Also pair every item with itself.
    pub with_repetition: bool,
}

impl PairOptions {
    const fn first_partner(self, position: usize) -> usize {
        if self.order_important {
            0
        } else if self.with_repetition {
            position
        } else {
            position + 1
        }
    }

    const fn skips(self, left: usize, right: usize) -> bool {
        self.order_important && !self.with_repetition && left == right
    }
}

/// Pairs of positions of a materialized source. See [`pairs`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Pairs<T> {
    items: Vec<T>,
    options: PairOptions,
    left: usize,
    right: usize,
}

impl<T: Clone> Iterator for Pairs<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        while self.left < self.items.len() {
            if self.right >= self.items.len() {
                self.left += 1;
                self.right = self.options.first_partner(self.left);
                continue;
            }
            let right = self.right;
            self.right += 1;
            if self.options.skips(self.left, right) {
                continue;
            }
            return Some((self.items[self.left].clone(), self.items[right].clone()));
        }
        None
    }
}

/// Yields pairs of items by position.
///
/// | `order_important` | `with_repetition` | yields |
/// |---|---|---|
/// | `false` | `false` | 2-combinations |
/// | `false` | `true` | 2-combinations with repetition |
/// | `true` | `false` | 2-permutations |
/// | `true` | `true` | the full Cartesian square |
///
/// Positions, not values, are compared, so equal items at different
/// positions still pair up.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::{PairOptions, pairs};
///
/// let result: Vec<(char, char)> = pairs("abc".chars(), PairOptions::default()).collect();
/// assert_eq!(result, vec![('a', 'b'), ('a', 'c'), ('b', 'c')]);
/// ```
pub fn pairs<S>(source: S, options: PairOptions) -> Pairs<S::Item>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Pairs {
        items: materialize(source, "pairs"),
        options,
        left: 0,
        right: options.first_partner(0),
    }
}
