//! Incremental insertion sort, the client of the ownbuf buffer policies.
//!
//! The algorithm is generic over [`ownbuf_core::Buffer`]: it only needs
//! sized construction, indexed reads and writes, `size()` and a range
//! shift. Any of the four ownership policies can be plugged in.
//!
//! ```
//! use ownbuf_core::Buffer;
//! use ownbuf_policy::ManualBuffer;
//! use ownbuf_sort::{fill_sorted, verify_sorted};
//!
//! let mut buf = ManualBuffer::with_len(5).unwrap();
//! fill_sorted(&mut buf, [5.0, 3.0, 8.0, 1.0, 4.0]).unwrap();
//! assert_eq!(buf.to_vec(), vec![1.0, 3.0, 4.0, 5.0, 8.0]);
//! verify_sorted(&buf).unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod insertion;
pub mod run;
pub mod source;
pub mod verify;

pub use config::SortConfig;
pub use error::SortError;
pub use insertion::{fill_sorted, insert_sorted, lower_bound};
pub use run::{run, SortRun};
pub use source::RandomSource;
pub use verify::verify_sorted;
