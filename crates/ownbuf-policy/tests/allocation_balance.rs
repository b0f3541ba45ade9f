//! Allocation balance across every lifecycle operation.
//!
//! Each test measures live heap blocks on its own thread with a counting
//! global allocator. A leak shows up as a positive delta; a double free
//! as a negative one (or a crash).

use ownbuf_core::Buffer;
use ownbuf_policy::{DeepCopyBuffer, ManualBuffer, SharedBuffer, UniqueBuffer};
use ownbuf_test_utils::{count_allocations, net_blocks, CountingAllocator};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn assert_empty_allocates_nothing<B: Buffer>() {
    let (buf, delta) = net_blocks(B::default);
    assert_eq!(delta, 0, "default construction allocated");
    drop(buf);

    let (buf, delta) = net_blocks(|| B::with_len(0).unwrap());
    assert_eq!(delta, 0, "with_len(0) allocated");
    let ((), delta) = net_blocks(|| drop(buf));
    assert_eq!(delta, 0, "dropping an empty buffer freed something");
}

fn assert_sized_owns_one_block<B: Buffer>() {
    let ((buf, requests), delta) =
        net_blocks(|| count_allocations(|| B::with_len(32).unwrap()));
    assert_eq!(requests, 1, "with_len(32) should make exactly one allocation");
    assert_eq!(delta, 1, "with_len(32) should hold exactly one block");
    let ((), delta) = net_blocks(|| drop(buf));
    assert_eq!(delta, -1, "drop should release exactly one block");
}

fn assert_move_is_allocation_free<B: Buffer>() {
    let mut a = B::with_len(16).unwrap();
    let (b, delta) = net_blocks(|| a.take());
    assert_eq!(delta, 0, "take allocated or freed");
    let ((), delta) = net_blocks(|| drop(a));
    assert_eq!(delta, 0, "moved-from buffer still owned a block");
    let ((), delta) = net_blocks(|| drop(b));
    assert_eq!(delta, -1);
}

fn assert_move_assign_releases_destination<B: Buffer>() {
    let mut source = B::with_len(8).unwrap();
    let mut dest = B::with_len(4).unwrap();
    assert_eq!(dest.size(), 4);
    let ((), delta) = net_blocks(|| dest = source.take());
    assert_eq!(delta, -1, "old destination block not released");
    assert_eq!(dest.size(), 8);
}

fn assert_balanced(body: impl FnOnce()) {
    let ((), delta) = net_blocks(body);
    assert_eq!(delta, 0, "lifecycle leaked or double-freed");
}

fn run_exclusive_balance<B: Buffer>() {
    assert_empty_allocates_nothing::<B>();
    assert_sized_owns_one_block::<B>();
    assert_move_is_allocation_free::<B>();
    assert_move_assign_releases_destination::<B>();
}

#[test]
fn deep_copy_buffer_is_balanced() {
    run_exclusive_balance::<DeepCopyBuffer>();

    let a = DeepCopyBuffer::with_len(10).unwrap();
    let (b, delta) = net_blocks(|| a.clone());
    assert_eq!(delta, 1, "deep copy should allocate one block");
    drop(b);

    assert_balanced(|| {
        let mut x = DeepCopyBuffer::from_values(&[1.0, 2.0, 3.0]).unwrap();
        x = x.clone();
        let mut y = DeepCopyBuffer::with_len(1).unwrap();
        y.clone_from(&x);
        y.clone_from(&x);
        let _z = y.take();
    });
}

#[test]
fn unique_buffer_is_balanced() {
    run_exclusive_balance::<UniqueBuffer>();

    assert_balanced(|| {
        let mut a = UniqueBuffer::with_len(64).unwrap();
        let mut b = a.take();
        a = b.take();
        b = a.take();
        assert_eq!(b.size(), 64);
    });
}

#[test]
fn manual_buffer_is_balanced() {
    run_exclusive_balance::<ManualBuffer>();

    let a = ManualBuffer::with_len(10).unwrap();
    let (b, delta) = net_blocks(|| a.clone());
    assert_eq!(delta, 1, "hand-written copy should allocate one block");
    drop(b);

    let mut dest = ManualBuffer::with_len(10).unwrap();
    let ((), delta) = net_blocks(|| dest.clone_from(&a));
    assert_eq!(delta, 0, "same-size copy-assign should reuse the block");

    let mut small = ManualBuffer::with_len(2).unwrap();
    let ((), delta) = net_blocks(|| small.clone_from(&a));
    assert_eq!(delta, 0, "resizing copy-assign should swap one block for another");
    assert_eq!(small.size(), 10);

    assert_balanced(|| {
        let mut x = ManualBuffer::from_values(&[4.0, 5.0]).unwrap();
        x = x.clone();
        let alias = x.clone();
        x.clone_from(&alias);
        let mut empty = ManualBuffer::default();
        empty.clone_from(&x);
        empty.clone_from(&ManualBuffer::default());
    });
}

#[test]
fn shared_construction_allocates_count_and_slots_together() {
    for len in [1, 32, 1000] {
        let (buf, requests) = count_allocations(|| SharedBuffer::with_len(len).unwrap());
        assert_eq!(requests, 1, "with_len({len}) went through a temporary block");
        assert_eq!(buf.ref_count(), 1);
        assert_eq!(buf.size(), len);
    }
}

#[test]
fn shared_buffer_releases_on_last_handle() {
    run_exclusive_balance::<SharedBuffer>();

    let a = SharedBuffer::with_len(10).unwrap();
    let (b, delta) = net_blocks(|| a.clone());
    assert_eq!(delta, 0, "sharing should not allocate");

    let ((), delta) = net_blocks(|| drop(a));
    assert_eq!(delta, 0, "block freed while a handle remains");
    assert_eq!(b.ref_count(), 1);

    let ((), delta) = net_blocks(|| drop(b));
    assert_eq!(delta, -1, "last handle did not free the block");

    assert_balanced(|| {
        let mut x = SharedBuffer::from_values(&[1.0, 2.0]).unwrap();
        x = x.clone();
        let alias = x.clone();
        x.clone_from(&alias);
        let mut other = SharedBuffer::with_len(3).unwrap();
        other.clone_from(&x);
        assert_eq!(x.ref_count(), 3);
    });
}
