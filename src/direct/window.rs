//! Windowing: `pairwise`, `slide_through`, `chunk` and `segmentize`.
//!
//! Every adapter here owns a scratch buffer and yields an owned snapshot of
//! it, so a window that has been handed out never changes afterwards.
//! Window and chunk sizes are checked when the adapter is built; a size of
//! zero is rejected before anything is pulled.

use std::collections::VecDeque;
use std::iter::Fuse;

use crate::error::SequenceError;
use crate::same_value::SameValue;

use super::clone_indexed;

pub(crate) const fn checked_window_size(window_size: usize) -> Result<usize, SequenceError> {
    if window_size == 0 {
        Err(SequenceError::InvalidWindowSize { window_size })
    } else {
        Ok(window_size)
    }
}

pub(crate) const fn checked_chunk_size(chunk_size: usize) -> Result<usize, SequenceError> {
    if chunk_size == 0 {
        Err(SequenceError::InvalidChunkSize { chunk_size })
    } else {
        Ok(chunk_size)
    }
}

/// Yields adjacent pairs. See [`pairwise`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Pairwise<I: Iterator> {
    iterator: I,
    previous: Option<I::Item>,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iterator.next()?;
            if let Some(previous) = self.previous.replace(item.clone()) {
                return Some((previous, item));
            }
        }
    }
}

/// Yields `(previous, current)` for every adjacent pair.
///
/// Zero or one items yield nothing.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::pairwise;
///
/// let result: Vec<(i32, i32)> = pairwise(vec![1, 2, 3]).collect();
/// assert_eq!(result, vec![(1, 2), (2, 3)]);
/// ```
pub fn pairwise<S>(source: S) -> Pairwise<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Pairwise {
        iterator: source.into_iter(),
        previous: None,
    }
}

/// Yields adjacent pairs plus a closing `(last, first)` pair. See
/// [`pairwise_cyclic`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct PairwiseCyclic<I: Iterator> {
    iterator: Fuse<I>,
    first: Option<I::Item>,
    previous: Option<I::Item>,
}

impl<I> Iterator for PairwiseCyclic<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(item) = self.iterator.next() else {
                // Both are taken, so the closing pair is yielded once.
                return self.previous.take().zip(self.first.take());
            };
            if self.first.is_none() {
                self.first = Some(item.clone());
                self.previous = Some(item);
                continue;
            }
            if let Some(previous) = self.previous.replace(item.clone()) {
                return Some((previous, item));
            }
        }
    }
}

/// Like [`pairwise`], but wraps around with a final `(last, first)` pair.
///
/// An empty source yields nothing; a single item `a` yields `(a, a)`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::pairwise_cyclic;
///
/// let result: Vec<(char, char)> = pairwise_cyclic("abc".chars()).collect();
/// assert_eq!(result, vec![('a', 'b'), ('b', 'c'), ('c', 'a')]);
/// ```
pub fn pairwise_cyclic<S>(source: S) -> PairwiseCyclic<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    PairwiseCyclic {
        iterator: source.into_iter().fuse(),
        first: None,
        previous: None,
    }
}

/// A sliding window of fixed width. See [`slide_through`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct SlideThrough<I: Iterator> {
    iterator: I,
    window: VecDeque<I::Item>,
    window_size: usize,
}

impl<I: Iterator> SlideThrough<I> {
    pub(crate) fn new(iterator: I, window_size: usize) -> Self {
        Self {
            iterator,
            window: VecDeque::with_capacity(window_size),
            window_size,
        }
    }
}

impl<I> Iterator for SlideThrough<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.window.len() < self.window_size {
            self.window.push_back(self.iterator.next()?);
        }
        let snapshot = self.window.iter().cloned().collect();
        self.window.pop_front();
        Some(snapshot)
    }
}

/// Yields every run of `window_size` consecutive items.
///
/// A source shorter than the window yields nothing.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidWindowSize`] when `window_size` is zero.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::slide_through;
///
/// let windows: Vec<Vec<i32>> = slide_through(1..=4, 3).unwrap().collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4]]);
/// ```
pub fn slide_through<S>(
    source: S,
    window_size: usize,
) -> Result<SlideThrough<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let window_size = checked_window_size(window_size).map_err(SequenceError::traced)?;
    Ok(SlideThrough::new(source.into_iter(), window_size))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CyclicPhase {
    Streaming,
    Wrapping { offset: usize, remaining: usize },
    Done,
}

/// A sliding window that wraps around to the start of the source. See
/// [`slide_through_cyclic`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct SlideThroughCyclic<I: Iterator> {
    iterator: I,
    // The first `window_size` items, which is all the wraparound ever needs.
    head: Vec<I::Item>,
    window: VecDeque<I::Item>,
    window_size: usize,
    phase: CyclicPhase,
}

impl<I: Iterator> SlideThroughCyclic<I> {
    pub(crate) fn new(iterator: I, window_size: usize) -> Self {
        Self {
            iterator,
            head: Vec::with_capacity(window_size),
            window: VecDeque::with_capacity(window_size),
            window_size,
            phase: CyclicPhase::Streaming,
        }
    }
}

impl<I> SlideThroughCyclic<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn snapshot_and_slide(&mut self) -> Vec<I::Item> {
        let snapshot = self.window.iter().cloned().collect();
        self.window.pop_front();
        snapshot
    }

    /// Switches to wraparound once the source is exhausted.
    ///
    /// A source at least as long as the window gets `window_size - 1`
    /// wrapped windows. A shorter source is first cycled until the window is
    /// one short of full, then gets one window per item.
    fn start_wrapping(&mut self) -> CyclicPhase {
        let length = self.head.len();
        if length == 0 {
            return CyclicPhase::Done;
        }
        let mut offset = 0;
        while self.window.len() + 1 < self.window_size {
            self.window.push_back(self.head[offset % length].clone());
            offset += 1;
        }
        let remaining = if length == self.window_size {
            self.window_size - 1
        } else {
            length
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            buffered = length,
            window_size = self.window_size,
            remaining,
            "slide_through_cyclic wrapping around"
        );
        CyclicPhase::Wrapping { offset, remaining }
    }
}

impl<I> Iterator for SlideThroughCyclic<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                CyclicPhase::Streaming => {
                    let Some(item) = self.iterator.next() else {
                        self.phase = self.start_wrapping();
                        continue;
                    };
                    if self.head.len() < self.window_size {
                        self.head.push(item.clone());
                    }
                    self.window.push_back(item);
                    if self.window.len() == self.window_size {
                        return Some(self.snapshot_and_slide());
                    }
                }
                CyclicPhase::Wrapping { remaining: 0, .. } | CyclicPhase::Done => {
                    self.phase = CyclicPhase::Done;
                    return None;
                }
                CyclicPhase::Wrapping { offset, remaining } => {
                    let wrapped = self.head[offset % self.head.len()].clone();
                    self.window.push_back(wrapped);
                    self.phase = CyclicPhase::Wrapping {
                        offset: offset + 1,
                        remaining: remaining - 1,
                    };
                    return Some(self.snapshot_and_slide());
                }
            }
        }
    }
}

/// Like [`slide_through`], but keeps sliding past the end by wrapping
/// around to the start of the source.
///
/// - source length `>= window_size`: `window_size - 1` extra wrapped
///   windows, one window per item in total
/// - source length `< window_size`: the source is cycled to fill the first
///   window, then one window is yielded per item
/// - empty source: nothing
///
/// Only the first `window_size` items are retained for the wraparound.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidWindowSize`] when `window_size` is zero.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::slide_through_cyclic;
///
/// let long: Vec<Vec<i32>> = slide_through_cyclic(1..=5, 3).unwrap().collect();
/// assert_eq!(long.len(), 5);
/// assert_eq!(long[4], vec![5, 1, 2]);
///
/// let short: Vec<Vec<i32>> = slide_through_cyclic(1..=3, 4).unwrap().collect();
/// assert_eq!(short, vec![vec![1, 2, 3, 1], vec![2, 3, 1, 2], vec![3, 1, 2, 3]]);
/// ```
pub fn slide_through_cyclic<S>(
    source: S,
    window_size: usize,
) -> Result<SlideThroughCyclic<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let window_size = checked_window_size(window_size).map_err(SequenceError::traced)?;
    Ok(SlideThroughCyclic::new(source.into_iter(), window_size))
}

/// Groups items into chunks of a fixed size. See [`chunk`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Chunk<I> {
    iterator: Fuse<I>,
    chunk_size: usize,
}

impl<I: Iterator> Chunk<I> {
    pub(crate) fn new(iterator: I, chunk_size: usize) -> Self {
        Self {
            iterator: iterator.fuse(),
            chunk_size,
        }
    }
}

impl<I: Iterator> Iterator for Chunk<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.iterator.by_ref().take(self.chunk_size).collect();
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

/// Yields consecutive chunks of `chunk_size` items; the last one may be
/// shorter.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidChunkSize`] when `chunk_size` is zero.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::chunk;
///
/// let chunks: Vec<Vec<i32>> = chunk(1..=5, 2).unwrap().collect();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk<S>(source: S, chunk_size: usize) -> Result<Chunk<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
{
    let chunk_size = checked_chunk_size(chunk_size).map_err(SequenceError::traced)?;
    Ok(Chunk::new(source.into_iter(), chunk_size))
}

/// Chunks that must all be full. See [`chunk_strict`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct ChunkStrict<I> {
    chunks: Chunk<I>,
    failed: bool,
}

impl<I: Iterator> ChunkStrict<I> {
    pub(crate) fn new(iterator: I, chunk_size: usize) -> Self {
        Self {
            chunks: Chunk::new(iterator, chunk_size),
            failed: false,
        }
    }
}

impl<I: Iterator> Iterator for ChunkStrict<I> {
    type Item = Result<Vec<I::Item>, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let chunk = self.chunks.next()?;
        if chunk.len() == self.chunks.chunk_size {
            return Some(Ok(chunk));
        }
        self.failed = true;
        Some(Err(SequenceError::IncompleteChunk {
            chunk_size: self.chunks.chunk_size,
            remainder: chunk.len(),
        }
        .traced()))
    }
}

/// Like [`chunk`], but a short final chunk is an error.
///
/// Every full chunk is yielded as `Ok` first; the short tail becomes a
/// single [`SequenceError::IncompleteChunk`] item, after which the adapter
/// is exhausted.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidChunkSize`] when `chunk_size` is zero.
pub fn chunk_strict<S>(
    source: S,
    chunk_size: usize,
) -> Result<ChunkStrict<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
{
    let chunk_size = checked_chunk_size(chunk_size).map_err(SequenceError::traced)?;
    Ok(ChunkStrict::new(source.into_iter(), chunk_size))
}

/// Groups consecutive items with the same projection. See [`segmentize_by`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct SegmentizeBy<I: Iterator, F, K> {
    iterator: Fuse<I>,
    projector: F,
    index: usize,
    pending: Option<(Vec<I::Item>, K)>,
}

impl<I, F, K> Iterator for SegmentizeBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> K,
    K: SameValue,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(item) = self.iterator.next() else {
                return self.pending.take().map(|(segment, _)| segment);
            };
            let key = (self.projector)(&item, self.index);
            self.index += 1;
            let continues = self
                .pending
                .as_ref()
                .is_some_and(|(_, current)| current.same_value(&key));
            if continues {
                if let Some((segment, _)) = self.pending.as_mut() {
                    segment.push(item);
                }
            } else if let Some((finished, _)) = self.pending.replace((vec![item], key)) {
                return Some(finished);
            }
        }
    }
}

/// Groups consecutive items whose `projector(item, index)` results are the
/// same value.
///
/// Projections are compared with [`SameValue`], so `NaN` keys group
/// together. The final segment is always yielded.
///
/// # Examples
///
/// ```rust
/// use seqpipe::direct::segmentize_by;
///
/// let result: Vec<Vec<i32>> = segmentize_by(vec![1, 3, 2, 4, 5], |value, _| value % 2).collect();
/// assert_eq!(result, vec![vec![1, 3], vec![2, 4], vec![5]]);
/// ```
pub fn segmentize_by<S, K, F>(source: S, projector: F) -> SegmentizeBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) -> K,
    K: SameValue,
{
    SegmentizeBy {
        iterator: source.into_iter().fuse(),
        projector,
        index: 0,
        pending: None,
    }
}

/// [`SegmentizeBy`] keyed by the items themselves.
pub type Segmentize<I> = SegmentizeBy<
    I,
    fn(&<I as Iterator>::Item, usize) -> <I as Iterator>::Item,
    <I as Iterator>::Item,
>;

/// Groups runs of equal consecutive items.
pub fn segmentize<S>(source: S) -> Segmentize<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone + SameValue,
{
    segmentize_by(source, clone_indexed as fn(&S::Item, usize) -> S::Item)
}
