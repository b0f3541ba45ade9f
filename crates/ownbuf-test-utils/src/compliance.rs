//! Buffer trait compliance test helpers.
//!
//! These functions verify that a [`Buffer`] implementation satisfies the
//! contract every policy shares, plus the copy contract of its policy
//! family. Reused across all policy test modules (DeepCopy, Unique,
//! Shared, Manual).

use ownbuf_core::Buffer;

const SIZES: [usize; 6] = [0, 1, 2, 7, 64, 1000];

fn sample(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64) * 1.5 - 3.0).collect()
}

/// Assert that `with_len(n)` yields `size() == n` with zeroed slots.
pub fn assert_sized_construction<B: Buffer>() {
    for n in SIZES {
        let buf = B::with_len(n).expect("with_len should succeed");
        assert_eq!(buf.size(), n, "with_len({n}).size() = {}", buf.size());
        assert_eq!(buf.is_empty(), n == 0);
        for i in 0..n {
            assert_eq!(buf.get(i), Some(0.0), "slot {i} of with_len({n}) not zeroed");
        }
        assert_eq!(buf.get(n), None, "get({n}) on size {n} should be None");
    }
}

/// Assert that `Default::default()` is the empty state.
pub fn assert_default_is_empty<B: Buffer>() {
    let buf = B::default();
    assert_eq!(buf.size(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.get(0), None);
    assert!(buf.to_vec().is_empty());
}

/// Assert that checked and unchecked writes are read back on both paths.
#[allow(unsafe_code)]
pub fn assert_write_then_read<B: Buffer>() {
    let mut buf = B::with_len(5).expect("with_len should succeed");
    buf.set_at(0, 1.25);
    // SAFETY: 4 < 5.
    unsafe { buf.set_unchecked(4, -8.0) };
    assert_eq!(buf.at(0), 1.25);
    assert_eq!(buf.get(4), Some(-8.0));
    // SAFETY: 0 < 5.
    assert_eq!(unsafe { buf.at_unchecked(0) }, 1.25);
    buf.set_at(0, 2.5);
    assert_eq!(buf.at(0), 2.5, "in-place replacement lost");
    assert_eq!(buf.size(), 5, "element writes must not resize");
}

/// Assert that `from_values` then `to_vec` preserves contents.
pub fn assert_from_values_preserves_contents<B: Buffer>() {
    for n in SIZES {
        let values = sample(n);
        let buf = B::from_values(&values).expect("from_values should succeed");
        assert_eq!(buf.to_vec(), values, "contents differ for len {n}");
    }
}

/// Assert that moving out transfers contents and empties the source.
pub fn assert_take_leaves_source_empty<B: Buffer>() {
    for n in SIZES {
        let values = sample(n);
        let mut a = B::from_values(&values).expect("from_values should succeed");
        let b = a.take();
        assert_eq!(b.size(), n);
        assert_eq!(b.to_vec(), values);
        assert_eq!(a.size(), 0, "moved-from buffer of len {n} not empty");
        assert_eq!(a.get(0), None);
    }
}

/// Assert that move-assigning over a populated buffer replaces it.
pub fn assert_move_assign_replaces<B: Buffer>() {
    let mut source = B::from_values(&[3.0, 1.0, 2.0]).expect("from_values should succeed");
    let mut dest = B::from_values(&[9.0; 10]).expect("from_values should succeed");
    assert_eq!(dest.size(), 10);
    dest = source.take();
    assert_eq!(dest.to_vec(), vec![3.0, 1.0, 2.0]);
    assert_eq!(source.size(), 0);
}

/// Assert that an empty (moved-from) buffer can be reassigned and moved again.
pub fn assert_empty_state_reassignable<B: Buffer>() {
    let mut a = B::from_values(&[1.0]).expect("from_values should succeed");
    let first = a.take();
    let second = a.take();
    assert_eq!(first.size(), 1);
    assert_eq!(second.size(), 0, "taking from an empty buffer yields empty");
    a = B::from_values(&[4.0, 5.0]).expect("from_values should succeed");
    assert_eq!(a.to_vec(), vec![4.0, 5.0]);
}

/// Assert that `shift_right` matches `slice::copy_within` for every range.
pub fn assert_shift_right_matches_copy_within<B: Buffer>() {
    let values = sample(6);
    for end in 0..values.len() {
        for start in 0..=end {
            let mut buf = B::from_values(&values).expect("from_values should succeed");
            buf.shift_right(start, end);
            let mut expected = values.clone();
            expected.copy_within(start..end, start + 1);
            assert_eq!(buf.to_vec(), expected, "shift_right({start}, {end}) mismatch");
        }
    }
}

/// Run every policy-independent check.
pub fn run_buffer_compliance<B: Buffer>() {
    assert_sized_construction::<B>();
    assert_default_is_empty::<B>();
    assert_write_then_read::<B>();
    assert_from_values_preserves_contents::<B>();
    assert_take_leaves_source_empty::<B>();
    assert_move_assign_replaces::<B>();
    assert_empty_state_reassignable::<B>();
    assert_shift_right_matches_copy_within::<B>();
}

/// Assert that a copy has the source's size and elements.
pub fn assert_copy_equal<B: Buffer + Clone>() {
    for n in SIZES {
        let a = B::from_values(&sample(n)).expect("from_values should succeed");
        let b = a.clone();
        assert_eq!(b.size(), a.size());
        assert_eq!(b.to_vec(), a.to_vec(), "copy of len {n} differs");
    }
}

/// Assert that a write through a copy does not reach the source.
pub fn assert_copy_independent<B: Buffer + Clone>() {
    let a = B::from_values(&[1.0, 2.0, 3.0]).expect("from_values should succeed");
    let mut b = a.clone();
    b.set_at(1, 42.0);
    assert_eq!(a.at(1), 2.0, "write through copy leaked into source");
    assert_eq!(b.at(1), 42.0);

    let mut c = B::with_len(3).expect("with_len should succeed");
    c.clone_from(&a);
    c.set_at(0, -1.0);
    assert_eq!(a.at(0), 1.0, "write through copy-assigned buffer leaked into source");
}

/// Assert that a write through a copy is visible through the source.
pub fn assert_copy_aliased<B: Buffer + Clone>() {
    let a = B::from_values(&[1.0, 2.0, 3.0]).expect("from_values should succeed");
    let mut b = a.clone();
    b.set_at(1, 42.0);
    assert_eq!(a.at(1), 42.0, "write through copy not visible in source");

    let mut c = B::with_len(7).expect("with_len should succeed");
    c.clone_from(&a);
    c.set_at(2, -5.0);
    assert_eq!(a.at(2), -5.0, "copy-assigned handle does not alias source");
}

/// Assert that self-assignment preserves size and contents.
///
/// Rust's borrow rules reject `x.clone_from(&x)` outright, so the cases
/// that can actually be written are checked: reassigning a clone of
/// itself, and copy-assigning from another handle that may share storage.
pub fn assert_self_assign_preserves<B: Buffer + Clone>() {
    let values = sample(8);

    let mut x = B::from_values(&values).expect("from_values should succeed");
    x = x.clone();
    assert_eq!(x.to_vec(), values, "x = x.clone() changed contents");

    let r = &mut x;
    *r = r.clone();
    assert_eq!(x.to_vec(), values, "*r = r.clone() changed contents");

    let alias = x.clone();
    x.clone_from(&alias);
    assert_eq!(x.to_vec(), values, "copy-assign from equal handle changed contents");
    assert_eq!(alias.to_vec(), values);

    let mut empty = B::default();
    let empty_alias = empty.clone();
    empty.clone_from(&empty_alias);
    assert_eq!(empty.size(), 0);
}

/// Run the checks for policies whose copies are independent blocks.
pub fn run_deep_copy_compliance<B: Buffer + Clone>() {
    assert_copy_equal::<B>();
    assert_copy_independent::<B>();
    assert_self_assign_preserves::<B>();
}

/// Run the checks for policies whose copies share one block.
pub fn run_shared_copy_compliance<B: Buffer + Clone>() {
    assert_copy_equal::<B>();
    assert_copy_aliased::<B>();
    assert_self_assign_preserves::<B>();
}
