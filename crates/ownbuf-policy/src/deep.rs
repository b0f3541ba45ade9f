//! Exclusive ownership with value semantics.
//!
//! [`DeepCopyBuffer`] owns its block outright. Cloning allocates a fresh
//! block and copies every element, so the clone and the original never
//! observe each other's writes. Moving out (via [`Buffer::take`] or
//! `std::mem::take`) steals the block and leaves the source empty.

use std::ops::{Index, IndexMut};

use ownbuf_core::{check_shift, out_of_range, Buffer, BufferError};

use crate::alloc::zeroed_slice;

/// A uniquely owned block whose copies are deep.
///
/// ```
/// use ownbuf_core::Buffer;
/// use ownbuf_policy::DeepCopyBuffer;
///
/// let a = DeepCopyBuffer::from_values(&[1.0, 2.0]).unwrap();
/// let mut b = a.clone();
/// b[0] = 10.0;
/// assert_eq!(a[0], 1.0);
/// assert_eq!(b[0], 10.0);
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct DeepCopyBuffer {
    data: Box<[f64]>,
}

impl DeepCopyBuffer {
    /// Clone without aborting on allocation failure.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        let mut data = zeroed_slice(self.data.len())?;
        data.copy_from_slice(&self.data);
        Ok(Self { data })
    }

    /// The slots as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The slots as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Clone for DeepCopyBuffer {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    /// Copy-assign. Reuses the existing block when the sizes match.
    fn clone_from(&mut self, source: &Self) {
        if self.data.len() == source.data.len() {
            self.data.copy_from_slice(&source.data);
        } else {
            *self = source.clone();
        }
    }
}

#[allow(unsafe_code)]
impl Buffer for DeepCopyBuffer {
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

impl Index<usize> for DeepCopyBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for DeepCopyBuffer {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}
