//! Fallible construction of zero-filled storage for the safe policies.

use std::alloc::Layout;
use std::cell::Cell;
use std::iter;
use std::rc::Rc;

use ownbuf_core::{block_bytes, block_layout, BufferError};

/// Zeroed boxed slice of `len` slots, without aborting on OOM.
///
/// Capacity is reserved exactly, so the conversion from `Vec` does not
/// reallocate.
pub(crate) fn zeroed_slice(len: usize) -> Result<Box<[f64]>, BufferError> {
    block_layout(len)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed {
            requested_bytes: block_bytes(len),
        })?;
    data.resize(len, 0.0);
    Ok(data.into_boxed_slice())
}

/// Reference-counted zeroed cells of `len` slots, in a single allocation.
///
/// The size, count header included, is validated here. `Rc` has no
/// fallible constructor, so an allocator refusal aborts the process.
pub(crate) fn zeroed_cells(len: usize) -> Result<Rc<[Cell<f64>]>, BufferError> {
    let slots = block_layout(len)?;
    Layout::new::<[usize; 2]>()
        .extend(slots)
        .map_err(|_| BufferError::CapacityOverflow { len })?;
    Ok(iter::repeat_n(Cell::new(0.0), len).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_slice_has_exact_len() {
        let data = zeroed_slice(12).unwrap();
        assert_eq!(data.len(), 12);
        assert!(data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zeroed_cells_are_writable() {
        let cells = zeroed_cells(3).unwrap();
        assert!(cells.iter().all(|c| c.get() == 0.0));
        cells[1].set(4.0);
        assert_eq!(cells[1].get(), 4.0);
        assert_eq!(Rc::strong_count(&cells), 1);
    }

    #[test]
    fn overflowing_len_is_reported() {
        assert_eq!(
            zeroed_slice(usize::MAX).unwrap_err(),
            BufferError::CapacityOverflow { len: usize::MAX }
        );
        assert_eq!(
            zeroed_cells(usize::MAX).unwrap_err(),
            BufferError::CapacityOverflow { len: usize::MAX }
        );
    }

    #[test]
    fn count_header_overflow_is_reported() {
        let len = (isize::MAX as usize) / std::mem::size_of::<f64>();
        assert!(block_layout(len).is_ok());
        assert_eq!(
            zeroed_cells(len).unwrap_err(),
            BufferError::CapacityOverflow { len }
        );
    }
}
