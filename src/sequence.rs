//! The sequence abstraction.
//!
//! A sequence is anything implementing [`IntoIterator`]: collections are
//! re-iterable, plain iterators are single-use. Nothing in this crate
//! guards against consuming a single-use source twice; that is the caller's
//! responsibility.
//!
//! Operator chains are normally typed statically. When a chain has to be
//! assembled at runtime (for example from configuration), erase the
//! sequences and operators to [`BoxedSequence`] / [`BoxedOperator`] and
//! fuse them with [`compose_all`](crate::compose::compose_all) or
//! [`pipe_all`](crate::compose::pipe_all).

/// A type-erased, single-use sequence.
pub type BoxedSequence<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// A type-erased operator from a sequence of `A` to a sequence of `B`.
pub type BoxedOperator<'a, A, B = A> =
    Box<dyn Fn(BoxedSequence<'a, A>) -> BoxedSequence<'a, B> + 'a>;

/// Erases the type of a sequence.
///
/// # Examples
///
/// ```rust
/// use seqpipe::sequence::{BoxedSequence, boxed};
///
/// let sources: Vec<BoxedSequence<'_, i32>> = vec![boxed(vec![1, 2]), boxed(3..5)];
/// let total: i32 = sources.into_iter().flatten().sum();
/// assert_eq!(total, 10);
/// ```
pub fn boxed<'a, S>(source: S) -> BoxedSequence<'a, S::Item>
where
    S: IntoIterator,
    S::IntoIter: 'a,
{
    Box::new(source.into_iter())
}

/// Erases the type of an operator so it can live in a runtime list.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::compose_all;
/// use seqpipe::sequence::{boxed, erase};
/// use seqpipe::operator::{skip, take_first};
///
/// let fused = compose_all(vec![erase(skip(1)), erase(take_first(2))]);
/// let result: Vec<char> = fused(boxed("abcd".chars())).collect();
/// assert_eq!(result, vec!['b', 'c']);
/// ```
pub fn erase<'a, A, B, F, O>(operator: F) -> BoxedOperator<'a, A, B>
where
    F: Fn(BoxedSequence<'a, A>) -> O + 'a,
    O: IntoIterator<Item = B>,
    O::IntoIter: 'a,
{
    Box::new(move |source| boxed(operator(source)))
}
