//! Direct (pipe-free) forms of every operator and ender.
//!
//! Each function here takes the source as its first argument and holds the
//! only implementation of its algorithm. Lazy algorithms return a named
//! iterator adapter; eager ones (sorting, reversing, every ender) consume the
//! source before returning. The factories in [`operator`](crate::operator)
//! and [`ender`](crate::ender) are thin adapters over these functions, so
//! all three call styles behave identically.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::direct;
//!
//! let windows: Vec<Vec<i32>> = direct::slide_through_cyclic(vec![1, 2, 3], 4)
//!     .unwrap()
//!     .collect();
//! assert_eq!(windows, vec![vec![1, 2, 3, 1], vec![2, 3, 1, 2], vec![3, 1, 2, 3]]);
//! ```
//!
//! # Laziness
//!
//! A lazy adapter pulls from its source only when it is itself pulled, and
//! never further than it must. Adapters that hold a mutable buffer
//! (`slide_through`, `chunk`, `segmentize_by`) yield an owned snapshot
//! each time, so windows already handed out never change.

mod combination;
mod filtering;
mod find;
mod flatten;
mod mapping;
mod reduce;
mod reorder;
mod set_algebra;
mod window;

pub use combination::{
    Concat, JoinWith, Zip, ZipPair, ZipPairStrict, ZipStrict, concat, end_with, join_with,
    start_with, zip, zip_pair, zip_pair_strict, zip_strict,
};
pub use filtering::{
    Filter, FilterIndex, Skip, SkipUntil, Slice, TakeFirst, TakeWhile, WithoutLast, filter,
    filter_index, skip, skip_until, skip_while, slice, take_first, take_until, take_while,
    without_last,
};
pub use find::{
    find, find_index, find_index_or_error, find_last, find_last_index, find_last_index_or_error,
    find_last_or_error, find_last_with_index, find_last_with_index_or_error, find_or_error,
    find_with_index, find_with_index_or_error, first, first_or_error, get_single,
    get_single_or_error, index_of, index_of_or_error, last, last_or_error, nth, nth_or_error,
};
pub use flatten::{
    FlattenDeep, FlattenNested, Nested, flatten, flatten_deep, flatten_nested, flatten_nested_once,
};
pub use mapping::{FlatMap, Map, Scan, Tap, flat_map, map, scan, scan_seeded, tap};
pub use reduce::{
    contains, count, every, for_each, join_as_string, max, max_by_key, max_by_key_or_error,
    max_or_error, min, min_by_key, min_by_key_or_error, min_or_error, partition, reduce,
    reduce_or_error, reduce_seeded, some, sum, to_map, to_set, to_vec,
};
pub use reorder::{
    Order, PairOptions, Pairs, pairs, reverse, sort, sort_by, sort_by_key,
};
pub use set_algebra::{
    Membership, MembershipUsing, SortedUnique, SortedUniqueBy, Union, Unique, UniqueBy,
    difference, difference_by, difference_using, intersection, intersection_by,
    intersection_using, sorted_unique, sorted_unique_by, union, unique, unique_by,
};
pub use window::{
    Chunk, ChunkStrict, Pairwise, PairwiseCyclic, Segmentize, SegmentizeBy, SlideThrough,
    SlideThroughCyclic, chunk, chunk_strict, pairwise, pairwise_cyclic, segmentize,
    segmentize_by, slide_through, slide_through_cyclic,
};

pub(crate) use filtering::slice_bounds;
pub(crate) use set_algebra::{collect_others, collect_others_by};
pub(crate) use window::{checked_chunk_size, checked_window_size};

/// Projection used by the identity-keyed variants (`unique`, `difference`, ...).
#[inline]
pub(crate) fn clone_item<T: Clone>(item: &T) -> T {
    item.clone()
}

/// Indexed projection used by `segmentize`.
#[inline]
pub(crate) fn clone_indexed<T: Clone>(item: &T, _index: usize) -> T {
    item.clone()
}
