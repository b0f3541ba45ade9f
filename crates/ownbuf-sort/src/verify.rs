//! Postcondition check for a filled buffer.

use ownbuf_core::Buffer;

use crate::error::SortError;

/// Check that `buf` is non-decreasing.
///
/// Compares each element with its predecessor starting from index 1, so
/// empty and single-element buffers pass without a comparison.
///
/// # Errors
///
/// [`SortError::Unsorted`] for the first pair with `previous > current`
/// (or either side NaN).
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn verify_sorted<B: Buffer>(buf: &B) -> Result<(), SortError> {
    for index in 1..buf.size() {
        let previous = buf.at(index - 1);
        let current = buf.at(index);
        // NaN on either side counts as out of order.
        if !(previous <= current) {
            return Err(SortError::Unsorted {
                index,
                previous,
                current,
            });
        }
    }
    Ok(())
}
