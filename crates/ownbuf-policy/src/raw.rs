//! Raw block primitives for [`ManualBuffer`](crate::manual::ManualBuffer).
//!
//! The only place in the crate that talks to the global allocator
//! directly. Each function carries a `// SAFETY:` comment for its unsafe
//! operation; callers own the bookkeeping of which block is live.

#![allow(unsafe_code)]

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error};
use std::ptr::NonNull;

use log::trace;
use ownbuf_core::{block_layout, BufferError};

/// Allocate a zeroed block of `len` `f64` slots.
///
/// `len == 0` returns a dangling, well-aligned pointer and allocates nothing.
pub(crate) fn alloc_block(len: usize) -> Result<NonNull<f64>, BufferError> {
    let layout = block_layout(len)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: layout has non-zero size.
    let raw = unsafe { alloc_zeroed(layout) };
    let ptr = NonNull::new(raw.cast::<f64>()).ok_or(BufferError::AllocationFailed {
        requested_bytes: layout.size(),
    })?;
    trace!("allocated block {ptr:p} ({len} slots)");
    Ok(ptr)
}

/// Allocate like [`alloc_block`], treating failure as fatal.
///
/// Used where the signature cannot carry an error (`Clone`).
pub(crate) fn alloc_block_or_abort(len: usize) -> NonNull<f64> {
    match alloc_block(len) {
        Ok(ptr) => ptr,
        Err(err) => match block_layout(len) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => panic!("{err}"),
        },
    }
}

/// Return a block obtained from [`alloc_block`] to the allocator.
///
/// # Safety
///
/// `ptr` must come from `alloc_block(len)` with the same `len`, and must
/// not have been released already.
pub(crate) unsafe fn release_block(ptr: NonNull<f64>, len: usize) {
    if len == 0 {
        return;
    }
    if let Ok(layout) = block_layout(len) {
        trace!("released block {ptr:p} ({len} slots)");
        // SAFETY: caller guarantees ptr was allocated with this layout and is live.
        unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}
