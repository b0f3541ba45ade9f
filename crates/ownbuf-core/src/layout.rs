//! Allocation layout for blocks of `f64` slots.

use std::alloc::Layout;

use crate::error::BufferError;

/// Layout of a contiguous block holding `len` `f64` values.
///
/// Every policy sizes its storage through this function so that an
/// impossible request fails the same way regardless of which allocator
/// path the policy takes afterwards.
pub fn block_layout(len: usize) -> Result<Layout, BufferError> {
    Layout::array::<f64>(len).map_err(|_| BufferError::CapacityOverflow { len })
}

/// Size in bytes of a block holding `len` values, saturating on overflow.
///
/// Used for error reporting only.
pub fn block_bytes(len: usize) -> usize {
    len.saturating_mul(std::mem::size_of::<f64>())
}
