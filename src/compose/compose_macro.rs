//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which fuses unary functions
//! from left to right, in the order data flows through them.

/// Composes unary functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the first function
/// listed is applied first. This is the order [`pipe!`](crate::pipe!) relies
/// on, so an operator chain reads the same way in both macros.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!()` - Returns [`identity`](crate::compose::identity)
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// Composition never inspects or iterates its arguments. Composing operators
/// only builds a new function; nothing is pulled from a source until the
/// composed function is applied and its result consumed.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use seqpipe::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = g(f(x)) = double(add_one(5)) = 12
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 12);
/// ```
///
/// ## Empty composition
///
/// ```
/// use seqpipe::compose;
///
/// let composed = compose!();
/// assert_eq!(composed("a"), "a");
/// ```
///
/// ## Fusing operators
///
/// ```
/// use seqpipe::compose;
/// use seqpipe::operator::{filter, map};
///
/// let evens_squared = compose!(
///     filter(|value: &i32, _| value % 2 == 0),
///     map(|value: i32, _| value * value),
/// );
/// let result: Vec<i32> = evens_squared(vec![1, 2, 3, 4]).collect();
/// assert_eq!(result, vec![4, 16]);
/// ```
#[macro_export]
macro_rules! compose {
    // No function: identity
    () => {
        $crate::compose::identity
    };

    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // Two or more functions: the first one runs first
    // compose!(f, g, h, ...) = |x| compose!(g, h, ...)(f(x))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_composed = $crate::compose!($($remaining_functions),+);
        move |input| remaining_composed(first(input))
    }};
}
