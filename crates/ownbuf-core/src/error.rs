//! Buffer error types.
//!
//! Only resource exhaustion is a recoverable-looking error here. Index
//! precondition violations are panics and copying a move-only buffer is a
//! compile error, so neither has a variant.

use std::error::Error;
use std::fmt;

/// Errors raised while acquiring storage for a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not provide the requested block.
    AllocationFailed {
        /// Size of the failed request in bytes.
        requested_bytes: usize,
    },
    /// `len * size_of::<f64>()` does not fit in a valid allocation layout.
    CapacityOverflow {
        /// Number of elements that was requested.
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "buffer allocation failed: requested {requested_bytes} bytes")
            }
            Self::CapacityOverflow { len } => {
                write!(f, "buffer capacity overflow: {len} elements exceed the addressable size")
            }
        }
    }
}

impl Error for BufferError {}
