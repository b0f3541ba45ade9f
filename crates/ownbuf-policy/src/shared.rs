//! Shared ownership through reference counting.
//!
//! Cloning a [`SharedBuffer`] hands out another handle to the same block;
//! a write through any handle is visible through all of them. The block is
//! freed when the last handle is dropped or reassigned away.
//!
//! The count is an `Rc`, not an `Arc`: handles are `!Send` and `!Sync`,
//! so sharing stays on one thread and the compiler enforces it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use ownbuf_core::{out_of_range, Buffer, BufferError};

use crate::alloc::zeroed_cells;

/// A reference-counted block of `f64` slots.
///
/// ```
/// use ownbuf_core::Buffer;
/// use ownbuf_policy::SharedBuffer;
///
/// let a = SharedBuffer::from_values(&[1.0, 2.0]).unwrap();
/// let b = a.clone();
/// b.set(0, 10.0);
/// assert_eq!(a.at(0), 10.0);
/// assert_eq!(a.ref_count(), 2);
/// ```
#[derive(Clone, Default)]
pub struct SharedBuffer {
    /// `None` is the empty state: no block, zero references.
    cells: Option<Rc<[Cell<f64>]>>,
}

impl SharedBuffer {
    /// Number of live handles to this buffer's block. Zero when empty.
    pub fn ref_count(&self) -> usize {
        self.cells.as_ref().map_or(0, Rc::strong_count)
    }

    /// Whether `self` and `other` reference the same block.
    ///
    /// Two empty buffers share nothing.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.cells, &other.cells) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The slots as cells. Empty when the buffer is empty.
    pub fn cells(&self) -> &[Cell<f64>] {
        self.cells.as_deref().unwrap_or(&[])
    }

    /// The cell at `index`, for in-place replacement through a shared handle.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    #[track_caller]
    pub fn cell(&self, index: usize) -> &Cell<f64> {
        let cells = self.cells();
        match cells.get(index) {
            Some(cell) => cell,
            None => out_of_range(index, cells.len()),
        }
    }

    /// Overwrite slot `index` through a shared reference. Every handle to
    /// the block observes the new value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    #[track_caller]
    pub fn set(&self, index: usize, value: f64) {
        self.cell(index).set(value);
    }
}

#[allow(unsafe_code)]
impl Buffer for SharedBuffer {
    /// Allocate `len` zeroed cells behind one reference count.
    ///
    /// Count header and slots share a single allocation. Oversized
    /// requests return [`BufferError::CapacityOverflow`], but `Rc` cannot
    /// report an allocator refusal, so out-of-memory aborts the process as
    /// `Clone` does for the exclusive policies.
    fn with_len(len: usize) -> Result<Self, BufferError> {
        if len == 0 {
            return Ok(Self::default());
        }
        Ok(Self {
            cells: Some(zeroed_cells(len)?),
        })
    }

    fn size(&self) -> usize {
        self.cells().len()
    }

    fn get(&self, index: usize) -> Option<f64> {
        self.cells().get(index).map(Cell::get)
    }

    fn set_at(&mut self, index: usize, value: f64) {
        self.set(index, value);
    }

    unsafe fn at_unchecked(&self, index: usize) -> f64 {
        // SAFETY: caller guarantees index < size.
        unsafe { self.cells().get_unchecked(index).get() }
    }

    unsafe fn set_unchecked(&mut self, index: usize, value: f64) {
        // SAFETY: caller guarantees index < size.
        unsafe { self.cells().get_unchecked(index).set(value) }
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("values", &self.to_vec())
            .field("ref_count", &self.ref_count())
            .finish()
    }
}
