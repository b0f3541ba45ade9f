//! Manually managed exclusive ownership.
//!
//! [`ManualBuffer`] is the baseline the other policies are measured
//! against. It holds a raw pointer and a count and writes every lifecycle
//! step by hand: allocation, deep copy, copy-assignment, move and release.
//! Nothing is delegated to `Box`, `Vec` or `Rc`.
//!
//! Copy-assignment ([`Clone::clone_from`]) overwrites in place when the
//! sizes match and otherwise builds the replacement block completely before
//! the old one is released. Either path leaves the destination intact if
//! source and destination are the same block.

#![allow(unsafe_code)]

use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

use ownbuf_core::{check_shift, out_of_range, Buffer, BufferError};

use crate::raw::{alloc_block, alloc_block_or_abort, release_block};

/// A raw, exclusively owned block of `f64` slots.
///
/// `ptr` is dangling exactly when `len == 0`.
pub struct ManualBuffer {
    len: usize,
    ptr: NonNull<f64>,
}

impl ManualBuffer {
    /// An empty buffer. Allocates nothing.
    pub const fn new() -> Self {
        Self {
            len: 0,
            ptr: NonNull::dangling(),
        }
    }

    /// Clone without aborting on allocation failure.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        let ptr = alloc_block(self.len)?;
        // SAFETY: both blocks hold `len` slots and are distinct allocations.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), self.len) };
        Ok(Self { len: self.len, ptr })
    }

    /// The slots as a slice.
    pub fn as_slice(&self) -> &[f64] {
        // SAFETY: ptr is valid for len initialised slots (dangling and aligned when len == 0).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The slots as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Default for ManualBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ManualBuffer {
    fn drop(&mut self) {
        // SAFETY: ptr/len describe the block this buffer owns; it is released once, here.
        unsafe { release_block(self.ptr, self.len) };
    }
}

impl Clone for ManualBuffer {
    fn clone(&self) -> Self {
        let ptr = alloc_block_or_abort(self.len);
        // SAFETY: both blocks hold `len` slots and are distinct allocations.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), self.len) };
        Self { len: self.len, ptr }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.len == source.len {
            // SAFETY: both blocks hold `len` slots. `ptr::copy` tolerates
            // overlap, so a block copied onto itself is unchanged.
            unsafe { ptr::copy(source.ptr.as_ptr(), self.ptr.as_ptr(), self.len) };
            return;
        }
        let replacement = source.clone();
        let old = std::mem::replace(self, replacement);
        drop(old);
    }
}

impl Buffer for ManualBuffer {
    fn with_len(len: usize) -> Result<Self, BufferError> {
        let ptr = alloc_block(len)?;
        Ok(Self { len, ptr })
    }

    fn size(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<f64> {
        if index < self.len {
            // SAFETY: index checked against len.
            Some(unsafe { *self.ptr.as_ptr().add(index) })
        } else {
            None
        }
    }

    fn set_at(&mut self, index: usize, value: f64) {
        if index >= self.len {
            out_of_range(index, self.len);
        }
        // SAFETY: index checked against len.
        unsafe { *self.ptr.as_ptr().add(index) = value };
    }

    unsafe fn at_unchecked(&self, index: usize) -> f64 {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len.
        unsafe { *self.ptr.as_ptr().add(index) }
    }

    unsafe fn set_unchecked(&mut self, index: usize, value: f64) {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len.
        unsafe { *self.ptr.as_ptr().add(index) = value };
    }

    fn shift_right(&mut self, start: usize, end: usize) {
        check_shift(start, end, self.len);
        // SAFETY: end < len, so both [start, end) and [start + 1, end + 1)
        // lie inside the block. `ptr::copy` is a memmove.
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(start), base.add(start + 1), end - start);
        }
    }
}

impl Index<usize> for ManualBuffer {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for ManualBuffer {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.as_mut_slice()[index]
    }
}

impl fmt::Debug for ManualBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualBuffer")
            .field("values", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ownbuf_test_utils::compliance;

    #[test]
    fn satisfies_buffer_contract() {
        compliance::run_buffer_compliance::<ManualBuffer>();
    }

    #[test]
    fn satisfies_value_copy_contract() {
        compliance::run_deep_copy_compliance::<ManualBuffer>();
    }

    #[test]
    fn empty_buffer_pointer_is_dangling() {
        let buf = ManualBuffer::with_len(0).unwrap();
        assert_eq!(buf.ptr, NonNull::dangling());
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn clone_copies_into_new_block() {
        let a = ManualBuffer::from_values(&[1.0, 2.0, 3.0]).unwrap();
        let b = a.clone();
        assert_ne!(a.ptr, b.ptr);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn clone_from_same_size_keeps_block() {
        let source = ManualBuffer::from_values(&[8.0, 9.0]).unwrap();
        let mut dest = ManualBuffer::with_len(2).unwrap();
        let block = dest.ptr;
        dest.clone_from(&source);
        assert_eq!(dest.ptr, block);
        assert_eq!(dest.as_slice(), &[8.0, 9.0]);
    }

    #[test]
    fn clone_from_larger_source_replaces_block() {
        let source = ManualBuffer::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut dest = ManualBuffer::from_values(&[5.0]).unwrap();
        dest.clone_from(&source);
        assert_eq!(dest.size(), 4);
        assert_eq!(dest.as_slice(), source.as_slice());
    }

    #[test]
    fn clone_from_empty_source_empties_destination() {
        let mut dest = ManualBuffer::from_values(&[5.0, 6.0]).unwrap();
        dest.clone_from(&ManualBuffer::new());
        assert!(dest.is_empty());
        assert_eq!(dest.ptr, NonNull::dangling());
    }

    #[test]
    fn try_clone_of_empty_allocates_nothing() {
        let empty = ManualBuffer::new();
        let copy = empty.try_clone().unwrap();
        assert_eq!(copy.ptr, NonNull::dangling());
    }

    #[test]
    fn shift_is_memmove() {
        let mut buf = ManualBuffer::from_values(&[1.0, 2.0, 3.0, 4.0, 0.0]).unwrap();
        buf.shift_right(1, 4);
        assert_eq!(buf.as_slice(), &[1.0, 2.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "index 1 out of range for buffer of size 1")]
    fn set_past_end_panics() {
        let mut buf = ManualBuffer::with_len(1).unwrap();
        buf.set_at(1, 0.0);
    }
}
