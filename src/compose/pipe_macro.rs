//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which threads a source through
//! a series of operators, optionally terminated by an ender.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(f, g, h)(x)`, that is
/// `h(g(f(x)))`. Every function is applied exactly once.
///
/// Operationally `pipe!` does not distinguish operators from enders: when the
/// last function is an ender the whole expression evaluates to the ender's
/// result instead of a sequence.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f, g, ...)` - Variadic form, returns `...g(f(x))`
/// - `pipe!(x, [f, g, ...])` - Array form, identical to the variadic form
/// - `pipe!(x, [])` - Returns `x` unchanged
///
/// The bracketed form is matched syntactically, so a runtime list of
/// operators goes through [`pipe_all`](crate::compose::pipe_all) instead.
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once.
///
/// # Examples
///
/// ## Operators and an ender
///
/// ```
/// use seqpipe::pipe;
/// use seqpipe::ender::to_vec;
/// use seqpipe::operator::{map, pairwise};
///
/// let result = pipe!(
///     vec![1, 2, 3],
///     map(|value: i32, _| value * 10),
///     pairwise(),
///     to_vec(),
/// );
/// assert_eq!(result, vec![(10, 20), (20, 30)]);
/// ```
///
/// ## Array form
///
/// ```
/// use seqpipe::pipe;
/// use seqpipe::ender::sum;
/// use seqpipe::operator::{skip, take_first};
///
/// let total: i32 = pipe!(1..=10, [skip(2), take_first(3), sum()]);
/// assert_eq!(total, 3 + 4 + 5);
/// ```
///
/// ## Plain functions
///
/// ```
/// use seqpipe::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let result = pipe!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
#[macro_export]
macro_rules! pipe {
    // Array form: unpack and defer to the variadic form
    ($value:expr, [$($function:expr),* $(,)?] $(,)?) => {
        $crate::pipe!($value $(, $function)*)
    };

    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
