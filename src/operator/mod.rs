//! Operator factories: lazy `Sequence -> Sequence` transforms.
//!
//! Each factory captures its arguments and returns a closure that applies
//! the matching [`direct`](crate::direct) function to whatever source it is
//! given. The closures are [`Fn`], so one operator can be stored and applied
//! to several sources; captured callbacks and operands must therefore be
//! [`Clone`].
//!
//! Factories that validate their arguments (`slide_through`, `chunk`,
//! `slice`, ...) return a `Result`, so a bad argument is reported before any
//! source exists.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::pipe;
//! use seqpipe::ender::to_vec;
//! use seqpipe::operator::{filter, map, take_first};
//!
//! let evens = filter(|value: &u32, _| value % 2 == 0);
//! let first_squares = pipe!(
//!     0..,
//!     evens,
//!     map(|value: u32, _| value * value),
//!     take_first(4),
//!     to_vec(),
//! );
//! assert_eq!(first_squares, vec![0, 4, 16, 36]);
//! ```
//!
//! Operators can also be composed ahead of time:
//!
//! ```rust
//! use seqpipe::compose;
//! use seqpipe::operator::{segmentize, skip};
//!
//! let runs_after_header = compose!(skip(1), segmentize());
//! let runs: Vec<Vec<char>> = runs_after_header("#aab".chars()).collect();
//! assert_eq!(runs, vec![vec!['a', 'a'], vec!['b']]);
//! ```

mod combination;
mod filtering;
mod flatten;
mod mapping;
mod reorder;
mod set_algebra;
mod window;

pub use combination::{
    concat, end_with, join_with, start_with, zip, zip_pair, zip_pair_strict, zip_strict,
};
pub use filtering::{
    filter, filter_index, skip, skip_until, skip_while, slice, take_first, take_until, take_while,
    without_last,
};
pub use flatten::{flatten, flatten_deep, flatten_nested, flatten_nested_once};
pub use mapping::{flat_map, map, scan, scan_seeded, tap};
pub use reorder::{pairs, reverse, sort, sort_by, sort_by_key};
pub use set_algebra::{
    difference, difference_by, difference_using, intersection, intersection_by,
    intersection_using, sorted_unique, sorted_unique_by, union, unique, unique_by,
};
pub use window::{
    chunk, chunk_strict, pairwise, pairwise_cyclic, segmentize, segmentize_by, slide_through,
    slide_through_cyclic,
};
