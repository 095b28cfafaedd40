//! Mapping: `map`, `flat_map`, `scan` and `tap`.

/// Maps every item with its index. See [`map`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iterator: I,
    mapper: F,
    index: usize,
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let item = self.iterator.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.mapper)(item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

/// Yields `mapper(item, index)` for every item, one to one and in order.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::map;
///
/// let result: Vec<String> = map(vec!['a', 'b'], |letter, index| format!("{index}{letter}")).collect();
/// assert_eq!(result, vec!["0a", "1b"]);
/// ```
pub fn map<S, B, F>(source: S, mapper: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> B,
{
    Map {
        iterator: source.into_iter(),
        mapper,
        index: 0,
    }
}

/// Maps every item to a sequence and flattens one level. See [`flat_map`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct FlatMap<I, F, U: IntoIterator> {
    iterator: I,
    mapper: F,
    index: usize,
    front: Option<U::IntoIter>,
}

impl<I, F, U> Iterator for FlatMap<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = self.front.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.front = None;
            }
            let item = self.iterator.next()?;
            let index = self.index;
            self.index += 1;
            self.front = Some((self.mapper)(item, index).into_iter());
        }
    }
}

/// Yields every element of `mapper(item, index)` before moving on to the
/// next source item.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::flat_map;
///
/// let result: Vec<i32> = flat_map(vec![1, 2, 3], |value, _| vec![value; value as usize]).collect();
/// assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<S, U, F>(source: S, mapper: F) -> FlatMap<S::IntoIter, F, U>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> U,
    U: IntoIterator,
{
    FlatMap {
        iterator: source.into_iter(),
        mapper,
        index: 0,
        front: None,
    }
}

/// Yields every intermediate accumulator of a fold. See [`scan`] and
/// [`scan_seeded`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Scan<I: Iterator, F, A> {
    iterator: I,
    reducer: F,
    accumulator: Option<A>,
    // Present only when no seed was given: turns the first item into the
    // initial accumulator without calling the reducer.
    seed_from_first: Option<fn(I::Item) -> A>,
    index: usize,
}

impl<I, F, A> Iterator for Scan<I, F, A>
where
    I: Iterator,
    F: FnMut(A, I::Item, usize) -> A,
    A: Clone,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let item = self.iterator.next()?;
        let index = self.index;
        self.index += 1;
        let accumulator = match (self.accumulator.take(), self.seed_from_first.take()) {
            (Some(accumulator), _) => (self.reducer)(accumulator, item, index),
            (None, Some(seed_from_first)) => seed_from_first(item),
            (None, None) => return None,
        };
        self.accumulator = Some(accumulator.clone());
        Some(accumulator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

/// Like [`reduce`](crate::direct::reduce), but yields every intermediate
/// accumulator.
///
/// The first item becomes the initial accumulator and is yielded unchanged;
/// the reducer runs from the second item on, receiving index 1 first. An
/// empty source yields nothing.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::scan;
///
/// let result: Vec<i32> = scan(vec![1, 2, 3, 4], |sum, value, _| sum + value).collect();
/// assert_eq!(result, vec![1, 3, 6, 10]);
/// ```
pub fn scan<S, F>(source: S, reducer: F) -> Scan<S::IntoIter, F, S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
    S::Item: Clone,
{
    Scan {
        iterator: source.into_iter(),
        reducer,
        accumulator: None,
        seed_from_first: Some(std::convert::identity),
        index: 0,
    }
}

/// Like [`reduce_seeded`](crate::direct::reduce_seeded), but yields every
/// intermediate accumulator.
///
/// The seed itself is never yielded; the reducer runs once per item,
/// including the first. An empty source yields nothing.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::scan_seeded;
///
/// let result: Vec<String> =
///     scan_seeded(vec!['a', 'b'], String::from(">"), |text, letter, _| text + &letter.to_string())
///         .collect();
/// assert_eq!(result, vec![">a", ">ab"]);
/// ```
pub fn scan_seeded<S, A, F>(source: S, seed: A, reducer: F) -> Scan<S::IntoIter, F, A>
where
    S: IntoIterator,
    F: FnMut(A, S::Item, usize) -> A,
    A: Clone,
{
    Scan {
        iterator: source.into_iter(),
        reducer,
        accumulator: Some(seed),
        seed_from_first: None,
        index: 0,
    }
}

/// Calls a side effect for every item, passing it through. See [`tap`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Tap<I, F> {
    iterator: I,
    effect: F,
    index: usize,
}

impl<I, F> Iterator for Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iterator.next()?;
        (self.effect)(&item, self.index);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

/// Runs `effect(item, index)` as each item passes through.
pub fn tap<S, F>(source: S, effect: F) -> Tap<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize),
{
    Tap {
        iterator: source.into_iter(),
        effect,
        index: 0,
    }
}
