//! Flattening of statically nested sequences and of dynamic [`Nested`] trees.

use std::iter::Flatten;
use std::vec;

use crate::error::SequenceError;

/// Yields the elements of every inner sequence, one level deep.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::flatten;
///
/// let result: Vec<i32> = flatten(vec![vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(result, vec![1, 2, 3]);
/// ```
pub fn flatten<S>(source: S) -> Flatten<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    source.into_iter().flatten()
}

/// A tree of values whose nesting depth is only known at runtime.
///
/// With the `serde` feature the tree is (de)serialized untagged, so the JSON
/// `[1, [2, 3]]` reads as a branch holding a leaf and a branch. A leaf type
/// that itself deserializes from an array shadows `Branch`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A nested sequence.
    Branch(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` for [`Nested::Leaf`].
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        Self::Branch(children)
    }
}

/// Unwinds a [`Nested`] sequence a fixed number of levels. See
/// [`flatten_nested`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FlattenNested<I, T> {
    iterator: I,
    depth: usize,
    stack: Vec<(vec::IntoIter<Nested<T>>, usize)>,
    failed: bool,
}

impl<I, T> Iterator for FlattenNested<I, T>
where
    I: Iterator<Item = Nested<T>>,
{
    type Item = Result<Nested<T>, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let pending = self
                .stack
                .last_mut()
                .map(|(children, depth)| children.next().map(|child| (child, *depth)));
            let (item, depth) = match pending {
                Some(Some(next)) => next,
                Some(None) => {
                    self.stack.pop();
                    continue;
                }
                None => (self.iterator.next()?, self.depth),
            };
            if depth == 0 {
                return Some(Ok(item));
            }
            match item {
                Nested::Branch(children) => self.stack.push((children.into_iter(), depth - 1)),
                Nested::Leaf(_) => {
                    self.failed = true;
                    return Some(Err(SequenceError::NotASequence { depth }.traced()));
                }
            }
        }
    }
}

/// Unwinds `depth` levels of nesting.
///
/// Depth 0 passes every item through. At each level below that, every item
/// must be a [`Nested::Branch`]; a [`Nested::Leaf`] in that position is
/// yielded as [`SequenceError::NotASequence`] and ends the sequence.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::{Nested, flatten_nested};
///
/// let source = vec![
///     Nested::Branch(vec![Nested::Leaf(1), Nested::Leaf(2)]),
///     Nested::Branch(vec![Nested::Leaf(3)]),
/// ];
/// let result: Result<Vec<Nested<i32>>, _> = flatten_nested(source, 1).collect();
/// assert_eq!(result.unwrap(), vec![Nested::Leaf(1), Nested::Leaf(2), Nested::Leaf(3)]);
/// ```
pub fn flatten_nested<S, T>(source: S, depth: usize) -> FlattenNested<S::IntoIter, T>
where
    S: IntoIterator<Item = Nested<T>>,
{
    FlattenNested {
        iterator: source.into_iter(),
        depth,
        stack: Vec::new(),
        failed: false,
    }
}

/// [`flatten_nested`] with the default depth of 1.
pub fn flatten_nested_once<S, T>(source: S) -> FlattenNested<S::IntoIter, T>
where
    S: IntoIterator<Item = Nested<T>>,
{
    flatten_nested(source, 1)
}

/// Yields every leaf of a [`Nested`] sequence, however deep. See
/// [`flatten_deep`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FlattenDeep<I, T> {
    iterator: I,
    stack: Vec<vec::IntoIter<Nested<T>>>,
}

impl<I, T> Iterator for FlattenDeep<I, T>
where
    I: Iterator<Item = Nested<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let pending = self.stack.last_mut().map(Iterator::next);
            let item = match pending {
                Some(Some(item)) => item,
                Some(None) => {
                    self.stack.pop();
                    continue;
                }
                None => self.iterator.next()?,
            };
            match item {
                Nested::Leaf(value) => return Some(value),
                Nested::Branch(children) => self.stack.push(children.into_iter()),
            }
        }
    }
}

/// Yields every leaf, depth first. Never fails.
pub fn flatten_deep<S, T>(source: S) -> FlattenDeep<S::IntoIter, T>
where
    S: IntoIterator<Item = Nested<T>>,
{
    FlattenDeep {
        iterator: source.into_iter(),
        stack: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32) -> Nested<i32> {
        Nested::Leaf(value)
    }

    fn branch(children: Vec<Nested<i32>>) -> Nested<i32> {
        Nested::Branch(children)
    }

    fn sample() -> Vec<Nested<i32>> {
        vec![
            branch(vec![branch(vec![leaf(111), leaf(112)]), branch(vec![leaf(121)])]),
            branch(vec![branch(vec![leaf(211)])]),
        ]
    }

    #[test]
    fn test_flatten_nested_depth_one() {
        let result: Vec<Nested<i32>> = flatten_nested_once(sample())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            result,
            vec![
                branch(vec![leaf(111), leaf(112)]),
                branch(vec![leaf(121)]),
                branch(vec![leaf(211)]),
            ]
        );
    }

    #[test]
    fn test_flatten_nested_depth_two() {
        let result: Vec<Nested<i32>> = flatten_nested(sample(), 2)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(result, vec![leaf(111), leaf(112), leaf(121), leaf(211)]);
    }

    #[test]
    fn test_flatten_nested_depth_zero_is_identity() {
        let result: Vec<Nested<i32>> = flatten_nested(sample(), 0)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(result, sample());
    }

    #[test]
    fn test_flatten_nested_too_deep_fails_at_the_leaf() {
        let mut flattened = flatten_nested(vec![branch(vec![leaf(1)]), leaf(2)], 2);
        assert_eq!(
            flattened.next(),
            Some(Err(SequenceError::NotASequence { depth: 1 }))
        );
        assert_eq!(flattened.next(), None);
    }

    #[test]
    fn test_flatten_nested_yields_before_failing() {
        let mut flattened = flatten_nested(vec![branch(vec![leaf(1)]), leaf(2)], 1);
        assert_eq!(flattened.next(), Some(Ok(leaf(1))));
        assert_eq!(
            flattened.next(),
            Some(Err(SequenceError::NotASequence { depth: 1 }))
        );
    }

    #[test]
    fn test_flatten_deep_yields_every_leaf() {
        let mut source = sample();
        source.push(leaf(3));
        let result: Vec<i32> = flatten_deep(source).collect();
        assert_eq!(result, vec![111, 112, 121, 211, 3]);
    }
}
