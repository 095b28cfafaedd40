//! Function composition utilities.
//!
//! This module provides the macros and functions that fuse operator chains
//! into a single callable and thread a source through them.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions left-to-right (first argument runs first)
//! - [`pipe!`]: Apply a chain of functions to a value, variadic or array form
//! - [`compose_all`] / [`pipe_all`]: The same over a runtime list
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`negate`]: Inverts an `(item, index)` predicate
//!
//! # Composition Order
//!
//! Unlike mathematical composition, [`compose!`] reads in data-flow order:
//!
//! ```text
//! compose!(f, g, h)(x) = h(g(f(x)))
//! pipe!(x, f, g, h)    = compose!(f, g, h)(x)
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Pipe Consistency**: `pipe!(x, f, g) == compose!(f, g)(x)`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{compose_all, constant, flip, identity, negate, pipe_all};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
