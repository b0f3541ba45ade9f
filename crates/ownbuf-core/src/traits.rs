//! The capability interface shared by every ownership policy.

use crate::error::BufferError;

/// A fixed-size block of `f64` slots.
///
/// Every ownership policy implements this trait, so algorithms and test
/// suites can be written once and instantiated per policy. The trait says
/// nothing about duplication: whether a buffer is `Clone`, and what a clone
/// means, is the policy's business.
///
/// # Access paths
///
/// - [`at`](Buffer::at) / [`set_at`](Buffer::set_at) panic when the index is
///   out of range. A violated precondition is never silently absorbed.
/// - [`get`](Buffer::get) returns `None` instead of panicking.
/// - [`at_unchecked`](Buffer::at_unchecked) /
///   [`set_unchecked`](Buffer::set_unchecked) skip the bounds check entirely.
///
/// # Empty state
///
/// `Default::default()` is the empty buffer: size zero and no allocation.
/// A buffer that has been moved out of via [`take`](Buffer::take) is in the
/// same state and may be reassigned or dropped freely.
#[allow(unsafe_code)]
pub trait Buffer: Default + Sized {
    /// Allocate a buffer of exactly `len` zeroed slots.
    ///
    /// `len == 0` never allocates.
    ///
    /// # Errors
    ///
    /// [`BufferError::CapacityOverflow`] if the byte size is not
    /// representable, [`BufferError::AllocationFailed`] if the allocator
    /// refuses the request.
    fn with_len(len: usize) -> Result<Self, BufferError>;

    /// Number of slots.
    fn size(&self) -> usize;

    /// Whether the buffer has no slots.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Checked read. `None` if `index >= size()`.
    fn get(&self, index: usize) -> Option<f64>;

    /// Read slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    #[track_caller]
    fn at(&self, index: usize) -> f64 {
        match self.get(index) {
            Some(value) => value,
            None => out_of_range(index, self.size()),
        }
    }

    /// Overwrite slot `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    fn set_at(&mut self, index: usize, value: f64);

    /// Read slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.size()` must hold.
    unsafe fn at_unchecked(&self, index: usize) -> f64;

    /// Overwrite slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.size()` must hold.
    unsafe fn set_unchecked(&mut self, index: usize, value: f64);

    /// Move slots `[start, end)` one position up, to `[start + 1, end + 1)`.
    ///
    /// Copies from the highest index down so no source slot is overwritten
    /// before it has been read. Slot `start` keeps its old value.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end && end < size()`.
    #[track_caller]
    fn shift_right(&mut self, start: usize, end: usize) {
        check_shift(start, end, self.size());
        for k in (start..end).rev() {
            // SAFETY: check_shift guarantees end < size, so k + 1 <= end is in range.
            unsafe {
                let value = self.at_unchecked(k);
                self.set_unchecked(k + 1, value);
            }
        }
    }

    /// Move the contents out, leaving `self` empty.
    ///
    /// This is the move-construct/move-assign operation: the returned
    /// buffer owns what `self` owned, and `self.size() == 0` afterwards.
    fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Allocate a buffer holding a copy of `values`.
    fn from_values(values: &[f64]) -> Result<Self, BufferError> {
        let mut buf = Self::with_len(values.len())?;
        for (index, &value) in values.iter().enumerate() {
            buf.set_at(index, value);
        }
        Ok(buf)
    }

    /// Copy the contents into a `Vec`.
    fn to_vec(&self) -> Vec<f64> {
        (0..self.size()).map(|index| self.at(index)).collect()
    }
}

/// Panic for an out-of-range index on a checked accessor.
#[cold]
#[track_caller]
pub fn out_of_range(index: usize, size: usize) -> ! {
    panic!("index {index} out of range for buffer of size {size}")
}

/// Validate the range handed to [`Buffer::shift_right`].
///
/// # Panics
///
/// Panics unless `start <= end && end < size`.
#[track_caller]
pub fn check_shift(start: usize, end: usize, size: usize) {
    assert!(
        start <= end && end < size,
        "shift range {start}..{end} does not fit buffer of size {size}"
    );
}
