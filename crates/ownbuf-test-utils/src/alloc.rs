//! Allocation-balance tracking for leak and double-free checks.
//!
//! Install [`CountingAllocator`] as the global allocator of an integration
//! test binary, then wrap the code under test in [`net_blocks`]:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: CountingAllocator = CountingAllocator;
//!
//! let ((), delta) = net_blocks(|| {
//!     let a = DeepCopyBuffer::with_len(8).unwrap();
//!     drop(a.clone());
//! });
//! assert_eq!(delta, 0);
//! ```
//!
//! Counts are per thread, so tests running in parallel do not disturb
//! each other.

#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static LIVE_BLOCKS: Cell<isize> = const { Cell::new(0) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record(delta: isize) {
    let _ = LIVE_BLOCKS.try_with(|live| live.set(live.get() + delta));
}

fn record_request() {
    let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
}

/// Forwards to [`System`] and counts, per calling thread, live blocks and
/// allocation requests.
///
/// `realloc` moves a block without changing the live count, but is counted
/// as a request.
pub struct CountingAllocator;

// SAFETY: every method forwards to `System` with the caller's arguments unchanged.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded contract.
        let ptr = unsafe { System.alloc(layout) };
        record_request();
        if !ptr.is_null() {
            record(1);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded contract.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        record_request();
        if !ptr.is_null() {
            record(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded contract.
        unsafe { System.dealloc(ptr, layout) };
        record(-1);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record_request();
        // SAFETY: forwarded contract.
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

/// Blocks allocated minus blocks freed on this thread so far.
pub fn live_blocks() -> isize {
    LIVE_BLOCKS.try_with(Cell::get).unwrap_or(0)
}

/// Run `f` and report how many blocks it left allocated.
///
/// Anything `f` returns is still alive when the count is taken, so
/// returning a buffer counts its block.
pub fn net_blocks<R>(f: impl FnOnce() -> R) -> (R, isize) {
    let before = live_blocks();
    let result = f();
    (result, live_blocks() - before)
}

/// Allocation requests (`alloc`, `alloc_zeroed`, `realloc`) made on this
/// thread so far.
pub fn allocations() -> usize {
    ALLOCATIONS.try_with(Cell::get).unwrap_or(0)
}

/// Run `f` and report how many allocation requests it made.
pub fn count_allocations<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let before = allocations();
    let result = f();
    (result, allocations() - before)
}
