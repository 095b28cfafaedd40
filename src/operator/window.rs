use crate::direct::{
    self, Chunk, ChunkStrict, Pairwise, PairwiseCyclic, Segmentize, SegmentizeBy, SlideThrough,
    SlideThroughCyclic,
};
use crate::error::SequenceError;
use crate::same_value::SameValue;

/// Operator form of [`direct::pairwise`].
pub fn pairwise<S>() -> impl Fn(S) -> Pairwise<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    direct::pairwise
}

/// Operator form of [`direct::pairwise_cyclic`].
pub fn pairwise_cyclic<S>() -> impl Fn(S) -> PairwiseCyclic<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    direct::pairwise_cyclic
}

/// Operator form of [`direct::slide_through`].
///
/// # Errors
///
/// Returns [`SequenceError::InvalidWindowSize`] when `window_size` is zero,
/// before any source is seen.
pub fn slide_through<S>(
    window_size: usize,
) -> Result<impl Fn(S) -> SlideThrough<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let window_size = direct::checked_window_size(window_size).map_err(SequenceError::traced)?;
    Ok(move |source: S| SlideThrough::new(source.into_iter(), window_size))
}

/// Operator form of [`direct::slide_through_cyclic`].
///
/// # Errors
///
/// Returns [`SequenceError::InvalidWindowSize`] when `window_size` is zero,
/// before any source is seen.
///
/// # Examples
///
/// ```rust
/// use seqpipe::SequenceError;
/// use seqpipe::operator::slide_through_cyclic;
///
/// let triangles = slide_through_cyclic(3).unwrap();
/// let corners: Vec<Vec<char>> = triangles("xyz".chars()).collect();
/// assert_eq!(corners.len(), 3);
///
/// assert_eq!(
///     slide_through_cyclic::<Vec<i32>>(0).err(),
///     Some(SequenceError::InvalidWindowSize { window_size: 0 })
/// );
/// ```
pub fn slide_through_cyclic<S>(
    window_size: usize,
) -> Result<impl Fn(S) -> SlideThroughCyclic<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let window_size = direct::checked_window_size(window_size).map_err(SequenceError::traced)?;
    Ok(move |source: S| SlideThroughCyclic::new(source.into_iter(), window_size))
}

/// Operator form of [`direct::chunk`].
///
/// # Errors
///
/// Returns [`SequenceError::InvalidChunkSize`] when `chunk_size` is zero.
pub fn chunk<S>(chunk_size: usize) -> Result<impl Fn(S) -> Chunk<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
{
    let chunk_size = direct::checked_chunk_size(chunk_size).map_err(SequenceError::traced)?;
    Ok(move |source: S| Chunk::new(source.into_iter(), chunk_size))
}

/// Operator form of [`direct::chunk_strict`].
///
/// # Errors
///
/// Returns [`SequenceError::InvalidChunkSize`] when `chunk_size` is zero.
pub fn chunk_strict<S>(
    chunk_size: usize,
) -> Result<impl Fn(S) -> ChunkStrict<S::IntoIter>, SequenceError>
where
    S: IntoIterator,
{
    let chunk_size = direct::checked_chunk_size(chunk_size).map_err(SequenceError::traced)?;
    Ok(move |source: S| ChunkStrict::new(source.into_iter(), chunk_size))
}

/// Operator form of [`direct::segmentize_by`].
pub fn segmentize_by<S, K, F>(projector: F) -> impl Fn(S) -> SegmentizeBy<S::IntoIter, F, K>
where
    S: IntoIterator,
    F: FnMut(&S::Item, usize) -> K + Clone,
    K: SameValue,
{
    move |source| direct::segmentize_by(source, projector.clone())
}

/// Operator form of [`direct::segmentize`].
pub fn segmentize<S>() -> impl Fn(S) -> Segmentize<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone + SameValue,
{
    direct::segmentize
}
