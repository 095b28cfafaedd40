//! Ender factories: eager `Sequence -> R` reducers.
//!
//! An ender is the last step of a pipe. Applying it drives iteration,
//! completely or until the answer is known, and returns a plain value. Like
//! operators, enders are [`Fn`] closures that may be reused across sources.
//!
//! Every "might not find a value" ender has two forms: the plain one
//! returns `Option`, the `_or_error` one returns
//! `Result<_, SequenceError>`.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::SequenceError;
//! use seqpipe::pipe;
//! use seqpipe::ender::{find, find_or_error};
//! use seqpipe::operator::map;
//!
//! let found = pipe!(1..=5, map(|value: i32, _| value * 3), find(|value: &i32, _| value % 2 == 0));
//! assert_eq!(found, Some(6));
//!
//! let missing = pipe!(vec![1, 3], find_or_error(|value: &i32, _| *value > 10));
//! assert_eq!(missing, Err(SequenceError::NotFound { operation: "find_or_error" }));
//! ```
//!
//! [`SequenceError`]: crate::SequenceError

mod find;
mod reduce;

pub use find::{
    find, find_index, find_index_or_error, find_last, find_last_index, find_last_index_or_error,
    find_last_or_error, find_last_with_index, find_last_with_index_or_error, find_or_error,
    find_with_index, find_with_index_or_error, first, first_or_error, get_single,
    get_single_or_error, index_of, index_of_or_error, last, last_or_error, nth, nth_or_error,
};
pub use reduce::{
    contains, count, every, for_each, join_as_string, max, max_by_key, max_by_key_or_error,
    max_or_error, min, min_by_key, min_by_key_or_error, min_or_error, partition, reduce,
    reduce_or_error, reduce_seeded, some, sum, to_map, to_set, to_vec,
};
