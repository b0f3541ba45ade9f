//! ownbuf: fixed-size `f64` buffers under four ownership policies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ownbuf sub-crates and hosts the `ownbuf` command-line driver.
//!
//! # Quick start
//!
//! ```rust
//! use ownbuf::prelude::*;
//!
//! // Move-only buffer: copying it would not compile.
//! let mut unique = UniqueBuffer::with_len(5).unwrap();
//! fill_sorted(&mut unique, [5.0, 3.0, 8.0, 1.0, 4.0]).unwrap();
//! assert_eq!(unique.to_vec(), vec![1.0, 3.0, 4.0, 5.0, 8.0]);
//!
//! // Shared buffer: copies alias one block.
//! let a = SharedBuffer::from_values(&[1.0, 2.0]).unwrap();
//! let b = a.clone();
//! b.set(1, 20.0);
//! assert_eq!(a.at(1), 20.0);
//!
//! // Pick a policy at runtime.
//! let report = run_policy(Policy::Manual, &SortConfig::new(100).with_seed(7)).unwrap();
//! assert!(report.verification.is_ok());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `ownbuf-core` | `Buffer` trait, `BufferError`, layout helper |
//! | [`policy`] | `ownbuf-policy` | The four buffer types and the `Policy` selector |
//! | [`sort`] | `ownbuf-sort` | Insertion sort, verification, seeded runs |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::time::Duration;

use ownbuf_core::Buffer;
use ownbuf_policy::{DeepCopyBuffer, ManualBuffer, Policy, SharedBuffer, UniqueBuffer};
use ownbuf_sort::{SortConfig, SortError};

/// Buffer trait and errors (`ownbuf-core`).
pub use ownbuf_core as buffer;

/// Buffer ownership policies (`ownbuf-policy`).
///
/// [`policy::DeepCopyBuffer`], [`policy::UniqueBuffer`],
/// [`policy::SharedBuffer`] and [`policy::ManualBuffer`], plus the runtime
/// [`policy::Policy`] name.
pub use ownbuf_policy as policy;

/// Insertion-sort client (`ownbuf-sort`).
pub use ownbuf_sort as sort;

/// Common imports for typical ownbuf usage.
pub mod prelude {
    pub use ownbuf_core::{Buffer, BufferError};
    pub use ownbuf_policy::{
        CopySemantics, DeepCopyBuffer, ManualBuffer, Policy, SharedBuffer, UniqueBuffer,
    };
    pub use ownbuf_sort::{fill_sorted, insert_sorted, verify_sorted, SortConfig, SortError};

    pub use crate::{run_policy, PolicyReport};
}

/// Summary of one sort run under a runtime-selected policy.
#[derive(Debug)]
pub struct PolicyReport {
    /// Policy the run used.
    pub policy: Policy,
    /// Number of values sorted.
    pub count: usize,
    /// Seed the values were drawn with.
    pub seed: u64,
    /// Time spent inserting values.
    pub elapsed: Duration,
    /// Result of the sortedness check.
    pub verification: Result<(), SortError>,
}

/// Run the insertion sort with the buffer type named by `policy`.
///
/// # Errors
///
/// [`SortError::Buffer`] if the buffer cannot be allocated. A failed
/// sortedness check is reported in [`PolicyReport::verification`], not as
/// an error.
pub fn run_policy(policy: Policy, config: &SortConfig) -> Result<PolicyReport, SortError> {
    match policy {
        Policy::DeepCopy => report::<DeepCopyBuffer>(policy, config),
        Policy::Unique => report::<UniqueBuffer>(policy, config),
        Policy::Shared => report::<SharedBuffer>(policy, config),
        Policy::Manual => report::<ManualBuffer>(policy, config),
    }
}

fn report<B: Buffer>(policy: Policy, config: &SortConfig) -> Result<PolicyReport, SortError> {
    let run = ownbuf_sort::run::<B>(config)?;
    Ok(PolicyReport {
        policy,
        count: run.buffer.size(),
        seed: run.seed,
        elapsed: run.elapsed,
        verification: run.verify(),
    })
}
