//! Small functions that slot into pipelines.
//!
//! - [`identity`]: Returns its argument
//! - [`constant`]: Ignores its argument and returns a fixed value
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`negate`]: Inverts an `(item, index)` predicate
//! - [`compose_all`] / [`pipe_all`]: Runtime-list counterparts of the macros

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition and what
/// `compose!()` evaluates to.
///
/// # Examples
///
/// ```
/// use seqpipe::compose::identity;
///
/// let same: Vec<Option<u8>> = vec![Some(1), None].into_iter().map(identity).collect();
/// assert_eq!(same, vec![Some(1), None]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use seqpipe::compose::constant;
///
/// let placeholders: Vec<&str> = "abc".chars().map(constant("?")).collect();
/// assert_eq!(placeholders, vec!["?", "?", "?"]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`, and flipping twice is the identity.
///
/// # Examples
///
/// ```
/// use seqpipe::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// assert_eq!(flip(subtract)(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Inverts an indexed predicate.
///
/// The result keeps the `(item, index)` shape used by every predicate in
/// this crate, and stays [`Clone`] so it can be handed to operator factories.
///
/// # Examples
///
/// ```
/// use seqpipe::compose::negate;
///
/// let is_even = |value: &i32, _: usize| value % 2 == 0;
/// let is_odd = negate(is_even);
/// assert!(is_odd(&3, 0));
/// assert!(!is_odd(&4, 1));
/// ```
#[inline]
pub fn negate<T, F>(predicate: F) -> impl Fn(&T, usize) -> bool + Clone
where
    T: ?Sized,
    F: Fn(&T, usize) -> bool + Clone,
{
    move |item, index| !predicate(item, index)
}

/// Composes a runtime list of unary functions from left to right.
///
/// The list must be homogeneous (`Fn(T) -> T`). An empty list yields the
/// identity function. For sequence operators, erase them first with
/// [`erase`](crate::sequence::erase).
///
/// # Examples
///
/// ```
/// use seqpipe::compose::compose_all;
///
/// let steps: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 2)];
/// let composed = compose_all(steps);
/// assert_eq!(composed(5), 12);
/// ```
pub fn compose_all<T, F>(functions: impl IntoIterator<Item = F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .fold(input, |accumulator, function| function(accumulator))
    }
}

/// Applies a runtime list of unary functions to a value, left to right.
///
/// `pipe_all(x, [f, g])` is `g(f(x))`; an empty list returns `x`.
///
/// # Examples
///
/// ```
/// use seqpipe::compose::pipe_all;
/// use seqpipe::sequence::{BoxedOperator, boxed, erase};
/// use seqpipe::operator::{filter, map};
///
/// let operators: Vec<BoxedOperator<'_, i32>> = vec![
///     erase(filter(|value: &i32, _| *value > 1)),
///     erase(map(|value: i32, _| value * 3)),
/// ];
/// let result: Vec<i32> = pipe_all(boxed(vec![1, 2, 3]), operators).collect();
/// assert_eq!(result, vec![6, 9]);
/// ```
pub fn pipe_all<T, F>(value: T, functions: impl IntoIterator<Item = F>) -> T
where
    F: FnOnce(T) -> T,
{
    functions
        .into_iter()
        .fold(value, |accumulator, function| function(accumulator))
}
