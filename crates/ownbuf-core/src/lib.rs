//! Core trait and error types for ownbuf.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Buffer`] capability trait that every ownership policy implements, the
//! [`BufferError`] type returned when storage cannot be acquired, and the
//! layout helper all policies size their allocations with.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod layout;
pub mod traits;

pub use error::BufferError;
pub use layout::{block_bytes, block_layout};
pub use traits::{check_shift, out_of_range, Buffer};
