use crate::direct::{self, FlatMap, Map, Scan, Tap};

/// Operator form of [`direct::map`].
pub fn map<S, B, F>(mapper: F) -> impl Fn(S) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> B + Clone,
{
    move |source| direct::map(source, mapper.clone())
}

/// Operator form of [`direct::flat_map`].
pub fn flat_map<S, U, F>(mapper: F) -> impl Fn(S) -> FlatMap<S::IntoIter, F, U>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> U + Clone,
    U: IntoIterator,
{
    move |source| direct::flat_map(source, mapper.clone())
}

/// Operator form of [`direct::scan`].
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipe;
/// use seqpipe::ender::to_vec;
/// use seqpipe::operator::scan;
///
/// let running_max = pipe!(vec![3, 1, 4, 1, 5], scan(|best: i32, value, _| best.max(value)), to_vec());
/// assert_eq!(running_max, vec![3, 3, 4, 4, 5]);
/// ```
pub fn scan<S, F>(reducer: F) -> impl Fn(S) -> Scan<S::IntoIter, F, S::Item>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item, usize) -> S::Item + Clone,
{
    move |source| direct::scan(source, reducer.clone())
}

/// Operator form of [`direct::scan_seeded`]. The seed is cloned for every
/// source.
pub fn scan_seeded<S, A, F>(seed: A, reducer: F) -> impl Fn(S) -> Scan<S::IntoIter, F, A>
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(A, S::Item, usize) -> A + Clone,
{
    move |source| direct::scan_seeded(source, seed.clone(), reducer.clone())
}

/// Operator form of [`direct::tap`].
pub fn tap<S, F>(effect: F) -> impl Fn(S) -> Tap<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) + Clone,
{
    move |source| direct::tap(source, effect.clone())
}
