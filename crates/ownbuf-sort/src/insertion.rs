//! Incremental insertion sort over a [`Buffer`].
//!
//! The buffer's first `filled` slots are kept sorted. Each new value is
//! placed by a lower-bound search over that prefix, the tail of the prefix
//! is shifted up one slot, and the value is written into the gap.

use ownbuf_core::Buffer;

use crate::error::SortError;

/// First index in `[0, len)` whose element is not less than `value`.
///
/// Returns `len` if every element is less. Among equal elements the
/// result is the front-most position. `buf[0..len]` must be sorted.
///
/// # Panics
///
/// Panics if `len > buf.size()`.
pub fn lower_bound<B: Buffer>(buf: &B, len: usize, value: f64) -> usize {
    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if buf.at(mid) < value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Insert `value` into the sorted prefix `[0, filled)`, growing it by one.
///
/// Returns the index the value was written to.
///
/// # Panics
///
/// Panics if `filled >= buf.size()` (no free slot).
pub fn insert_sorted<B: Buffer>(buf: &mut B, filled: usize, value: f64) -> usize {
    let j = lower_bound(buf, filled, value);
    buf.shift_right(j, filled);
    buf.set_at(j, value);
    j
}

/// Fill every slot of `buf` from `values`, keeping the buffer sorted.
///
/// Consumes exactly `buf.size()` values. A zero-size buffer consumes none.
///
/// # Errors
///
/// [`SortError::SourceExhausted`] if `values` ends early. The slots filled
/// so far remain sorted.
pub fn fill_sorted<B, I>(buf: &mut B, values: I) -> Result<(), SortError>
where
    B: Buffer,
    I: IntoIterator<Item = f64>,
{
    let needed = buf.size();
    let mut values = values.into_iter();
    for filled in 0..needed {
        let value = values
            .next()
            .ok_or(SortError::SourceExhausted { filled, needed })?;
        insert_sorted(buf, filled, value);
    }
    Ok(())
}
