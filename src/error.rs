//! Error types for sequence processing.
//!
//! Every failure in this crate is a [`SequenceError`]. Precondition
//! violations are returned by the factory (or direct constructor) itself,
//! before anything is iterated. Failures that can only be observed while
//! iterating are yielded as an `Err` item, after which the adapter is
//! exhausted.

/// Represents errors raised by operators, enders and direct functions.
///
/// # Examples
///
/// ```rust
/// use seqpipe::SequenceError;
///
/// let error = SequenceError::InvalidWindowSize { window_size: 0 };
/// assert_eq!(
///     format!("{error}"),
///     "Window size must be an integer not less than 1; an attempt was made to define the window size as 0."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A window size of zero was requested.
    InvalidWindowSize {
        /// The rejected window size.
        window_size: usize,
    },
    /// A chunk size of zero was requested.
    InvalidChunkSize {
        /// The rejected chunk size.
        chunk_size: usize,
    },
    /// A slice range whose end lies before its start.
    InvalidSliceRange {
        /// Inclusive start index.
        start: usize,
        /// Exclusive end index.
        end: usize,
    },
    /// The source ended with items that do not fill a whole chunk.
    IncompleteChunk {
        /// The requested chunk size.
        chunk_size: usize,
        /// How many items were left over.
        remainder: usize,
    },
    /// Strictly zipped sources have different lengths.
    LengthMismatch,
    /// A leaf was found where a nested sequence was required.
    NotASequence {
        /// The remaining flatten depth at which the leaf was found.
        depth: usize,
    },
    /// No item satisfied the search.
    NotFound {
        /// The name of the failing operation.
        operation: &'static str,
    },
    /// The source yielded no items.
    Empty {
        /// The name of the failing operation.
        operation: &'static str,
    },
    /// Exactly one item was expected, but a second one arrived.
    MoreThanOne,
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWindowSize { window_size } => write!(
                formatter,
                "Window size must be an integer not less than 1; an attempt was made to define the window size as {window_size}."
            ),
            Self::InvalidChunkSize { chunk_size } => write!(
                formatter,
                "Chunk size must be an integer not less than 1; an attempt was made to define the chunk size as {chunk_size}."
            ),
            Self::InvalidSliceRange { start, end } => write!(
                formatter,
                "start ({start}) cannot be larger than end ({end})"
            ),
            Self::IncompleteChunk {
                chunk_size,
                remainder,
            } => write!(
                formatter,
                "Chunk size was defined as {chunk_size}, but the source ends with {remainder} items that cannot be collected into a chunk of the specified size."
            ),
            Self::LengthMismatch => write!(
                formatter,
                "All sequences given to zip_strict must be of the same length."
            ),
            Self::NotASequence { depth } => write!(
                formatter,
                "Cannot iterate over a leaf value; {depth} more level(s) of nesting were expected."
            ),
            Self::NotFound { operation } => write!(formatter, "{operation}: value not found."),
            Self::Empty { operation } => write!(formatter, "{operation}: no items yielded."),
            Self::MoreThanOne => write!(
                formatter,
                "Expected only one item, but found more than one."
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

impl SequenceError {
    /// Emits the error as a debug event when the `tracing` feature is on.
    #[inline]
    pub(crate) fn traced(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %self, "sequence error");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chunk_size_display() {
        let error = SequenceError::InvalidChunkSize { chunk_size: 0 };
        assert_eq!(
            format!("{error}"),
            "Chunk size must be an integer not less than 1; an attempt was made to define the chunk size as 0."
        );
    }

    #[test]
    fn test_invalid_slice_range_display() {
        let error = SequenceError::InvalidSliceRange { start: 5, end: 2 };
        assert_eq!(format!("{error}"), "start (5) cannot be larger than end (2)");
    }

    #[test]
    fn test_incomplete_chunk_display() {
        let error = SequenceError::IncompleteChunk {
            chunk_size: 2,
            remainder: 1,
        };
        assert!(format!("{error}").starts_with("Chunk size was defined as 2"));
    }

    #[test]
    fn test_not_found_names_operation() {
        let error = SequenceError::NotFound {
            operation: "find_or_error",
        };
        assert_eq!(format!("{error}"), "find_or_error: value not found.");
    }

    #[test]
    fn test_error_equality_and_clone() {
        let error = SequenceError::Empty { operation: "first" };
        assert_eq!(error.clone(), error);
        assert_ne!(error, SequenceError::MoreThanOne);
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SequenceError::LengthMismatch);
    }
}
