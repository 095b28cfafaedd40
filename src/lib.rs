//! # seqpipe
//!
//! Lazy sequence processing for Rust: a `pipe!`/`compose!` core plus a
//! family of operators (lazy `Sequence -> Sequence` transforms) and enders
//! (eager `Sequence -> R` reducers) over anything that implements
//! [`IntoIterator`].
//!
//! ## Overview
//!
//! Every algorithm exists in three call styles that behave identically:
//!
//! - **Pipe style**: `pipe!(source, operator1, operator2, ender)`
//! - **Direct style**: `direct::slide_through(source, 3)`
//! - **Factory style**: `operator::slide_through(3)` returns a reusable
//!   closure that can be applied to any number of sources
//!
//! The direct functions in [`direct`] hold the only implementation of each
//! algorithm. The [`operator`] and [`ender`] factories are thin adapters.
//!
//! ## Feature Flags
//!
//! - `operator`: Operator factories (default)
//! - `ender`: Ender factories (default)
//! - `fxhash` / `ahash`: Faster hashers for internal seen-sets
//! - `serde`: `Serialize`/`Deserialize` for [`direct::Nested`]
//! - `tracing`: Trace events at the eager points of the library
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqpipe::prelude::*;
//! use seqpipe::pipe;
//!
//! let windows = pipe!(
//!     vec![1, 2, 3, 4, 5],
//!     operator::slide_through_cyclic(3).unwrap(),
//!     ender::to_vec(),
//! );
//! assert_eq!(
//!     windows,
//!     vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![4, 5, 1], vec![5, 1, 2]],
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Brings the module namespaces into scope rather than every function,
/// since operators and enders share names with their direct counterparts.
///
/// # Usage
///
/// ```rust
/// use seqpipe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::{compose_all, constant, flip, identity, negate, pipe_all};
    pub use crate::direct;
    pub use crate::error::SequenceError;
    pub use crate::generator;
    pub use crate::same_value::{SameValue, SameValueKey};
    pub use crate::sequence::{BoxedOperator, BoxedSequence, boxed, erase};

    #[cfg(feature = "operator")]
    pub use crate::operator;

    #[cfg(feature = "ender")]
    pub use crate::ender;
}

pub mod compose;
pub mod direct;
pub mod error;
pub mod generator;
pub mod same_value;
pub mod sequence;

#[cfg(feature = "operator")]
pub mod operator;

#[cfg(feature = "ender")]
pub mod ender;

pub use error::SequenceError;
