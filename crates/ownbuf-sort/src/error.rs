//! Errors from the insertion-sort client.

use std::error::Error;
use std::fmt;

use ownbuf_core::BufferError;

/// Errors from building or checking a sorted buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum SortError {
    /// The buffer could not be allocated.
    Buffer(BufferError),
    /// The value source ran dry before the buffer was full.
    SourceExhausted {
        /// Slots filled before the source ended.
        filled: usize,
        /// Slots the buffer has.
        needed: usize,
    },
    /// Verification found a descending pair.
    Unsorted {
        /// Index of the second element of the pair.
        index: usize,
        /// Value at `index - 1`.
        previous: f64,
        /// Value at `index`.
        current: f64,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(err) => write!(f, "cannot allocate sort buffer: {err}"),
            Self::SourceExhausted { filled, needed } => {
                write!(f, "value source exhausted after {filled} of {needed} values")
            }
            Self::Unsorted {
                index,
                previous,
                current,
            } => write!(
                f,
                "values out of order at index {index}: {previous} > {current}"
            ),
        }
    }
}

impl Error for SortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for SortError {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}
