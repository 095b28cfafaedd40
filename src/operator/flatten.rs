use std::iter::Flatten;

use crate::direct::{self, FlattenDeep, FlattenNested, Nested};

/// Operator form of [`direct::flatten`].
pub fn flatten<S>() -> impl Fn(S) -> Flatten<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    direct::flatten
}

/// Operator form of [`direct::flatten_nested`].
pub fn flatten_nested<S, T>(depth: usize) -> impl Fn(S) -> FlattenNested<S::IntoIter, T>
where
    S: IntoIterator<Item = Nested<T>>,
{
    move |source| direct::flatten_nested(source, depth)
}

/// Operator form of [`direct::flatten_nested_once`].
pub fn flatten_nested_once<S, T>() -> impl Fn(S) -> FlattenNested<S::IntoIter, T>
where
    S: IntoIterator<Item = Nested<T>>,
{
    direct::flatten_nested_once
}

/// Operator form of [`direct::flatten_deep`].
pub fn flatten_deep<S, T>() -> impl Fn(S) -> FlattenDeep<S::IntoIter, T>
where
    S: IntoIterator<Item = Nested<T>>,
{
    direct::flatten_deep
}
