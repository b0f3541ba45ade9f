//! Ownership policies for fixed-size `f64` buffers.
//!
//! Four types implement [`ownbuf_core::Buffer`] and differ only in what
//! copy, move and drop mean. Raw allocation is confined to the private
//! `raw` module behind [`ManualBuffer`].
//!
//! # Policies
//!
//! ```text
//! Policy      storage               copy                 drop
//! ─────────── ───────────────────── ──────────────────── ─────────────────────
//! DeepCopy    Box<[f64]>            new block, memcpy    free
//! Unique      Box<[f64]>            does not compile     free
//! Shared      Rc<[Cell<f64>]>       new handle, rc + 1   rc - 1, free at zero
//! Manual      NonNull<f64> + len    hand-written memcpy  hand-written free
//! ```
//!
//! Every policy moves the same way: [`Buffer::take`](ownbuf_core::Buffer::take)
//! (or `std::mem::take`) hands the storage to the caller and leaves the
//! source empty, with `size() == 0` and nothing allocated.
//!
//! # Threading
//!
//! `SharedBuffer` and `ManualBuffer` are `!Send` and `!Sync`. The reference
//! count is not atomic and the raw block has no synchronisation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod alloc;
pub mod deep;
pub mod manual;
pub mod policy;
mod raw;
pub mod shared;
pub mod unique;

pub use deep::DeepCopyBuffer;
pub use manual::ManualBuffer;
pub use policy::{CopySemantics, ParsePolicyError, Policy};
pub use shared::SharedBuffer;
pub use unique::UniqueBuffer;
