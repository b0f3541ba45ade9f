//! Test utilities for ownbuf development.
//!
//! Provides the [`compliance`] assertion suite that every buffer policy is
//! run through, a [`CountingAllocator`](alloc::CountingAllocator) for
//! leak and double-free balance checks, and shared value [`fixtures`].

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc;
pub mod compliance;
pub mod fixtures;

pub use alloc::{allocations, count_allocations, live_blocks, net_blocks, CountingAllocator};
