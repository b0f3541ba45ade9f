//! Exclusive ownership, move only.
//!
//! [`UniqueBuffer`] has no `Clone` impl, so accidental duplication is a
//! compile error rather than a runtime check:
//!
//! ```compile_fail
//! use ownbuf_core::Buffer;
//! use ownbuf_policy::UniqueBuffer;
//!
//! let a = UniqueBuffer::with_len(4).unwrap();
//! let b = a.clone();
//! ```
//!
//! Copy-assignment is rejected the same way:
//!
//! ```compile_fail
//! use ownbuf_core::Buffer;
//! use ownbuf_policy::UniqueBuffer;
//!
//! let a = UniqueBuffer::with_len(4).unwrap();
//! let mut b = UniqueBuffer::with_len(4).unwrap();
//! b.clone_from(&a);
//! ```
//!
//! Ownership can only be transferred:
//!
//! ```
//! use ownbuf_core::Buffer;
//! use ownbuf_policy::UniqueBuffer;
//!
//! let mut a = UniqueBuffer::from_values(&[1.0, 2.0]).unwrap();
//! let b = a.take();
//! assert_eq!(a.size(), 0);
//! assert_eq!(b.as_slice(), &[1.0, 2.0]);
//! ```

use std::ops::{Index, IndexMut};

use ownbuf_core::{check_shift, out_of_range, Buffer, BufferError};

use crate::alloc::zeroed_slice;

/// A uniquely owned block that can be moved but never copied.
#[derive(Debug, Default, PartialEq)]
pub struct UniqueBuffer {
    data: Box<[f64]>,
}

impl UniqueBuffer {
    /// The slots as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The slots as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Give up the buffer and return its block.
    pub fn into_boxed_slice(self) -> Box<[f64]> {
        self.data
    }
}

impl From<Box<[f64]>> for UniqueBuffer {
    fn from(data: Box<[f64]>) -> Self {
        Self { data }
    }
}

#[allow(unsafe_code)]
impl Buffer for UniqueBuffer {
    fn with_len(len: usize) -> Result<Self, BufferError> {
        Ok(Self {
            data: zeroed_slice(len)?,
        })
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    fn set_at(&mut self, index: usize, value: f64) {
        let size = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => *slot = value,
            None => out_of_range(index, size),
        }
    }

    unsafe fn at_unchecked(&self, index: usize) -> f64 {
        // SAFETY: caller guarantees index < size.
        unsafe { *self.data.get_unchecked(index) }
    }

    unsafe fn set_unchecked(&mut self, index: usize, value: f64) {
        // SAFETY: caller guarantees index < size.
        unsafe { *self.data.get_unchecked_mut(index) = value }
    }

    fn shift_right(&mut self, start: usize, end: usize) {
        check_shift(start, end, self.data.len());
        self.data.copy_within(start..end, start + 1);
    }
}

impl Index<usize> for UniqueBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for UniqueBuffer {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}
