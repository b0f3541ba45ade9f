//! Criterion micro-benchmarks for allocation, copy and move of each policy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ownbuf_core::Buffer;
use ownbuf_policy::{DeepCopyBuffer, ManualBuffer, SharedBuffer, UniqueBuffer};

const LEN: usize = 10_000;

fn bench_alloc_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc_10k");
    group.bench_function("deep-copy", |b| {
        b.iter(|| black_box(DeepCopyBuffer::with_len(LEN).unwrap()));
    });
    group.bench_function("unique", |b| {
        b.iter(|| black_box(UniqueBuffer::with_len(LEN).unwrap()));
    });
    group.bench_function("shared", |b| {
        b.iter(|| black_box(SharedBuffer::with_len(LEN).unwrap()));
    });
    group.bench_function("manual", |b| {
        b.iter(|| black_box(ManualBuffer::with_len(LEN).unwrap()));
    });
    group.finish();
}

/// Deep copies pay for a block and a memcpy; a shared copy is a count bump.
fn bench_copy_10k(c: &mut Criterion) {
    let deep = DeepCopyBuffer::with_len(LEN).unwrap();
    let shared = SharedBuffer::with_len(LEN).unwrap();
    let manual = ManualBuffer::with_len(LEN).unwrap();

    let mut group = c.benchmark_group("copy_10k");
    group.bench_function("deep-copy", |b| b.iter(|| black_box(deep.clone())));
    group.bench_function("shared", |b| b.iter(|| black_box(shared.clone())));
    group.bench_function("manual", |b| b.iter(|| black_box(manual.clone())));
    group.finish();
}

/// Copy-assignment into a destination of the same size reuses its block.
fn bench_copy_assign_10k(c: &mut Criterion) {
    let deep_src = DeepCopyBuffer::with_len(LEN).unwrap();
    let mut deep_dst = DeepCopyBuffer::with_len(LEN).unwrap();
    let manual_src = ManualBuffer::with_len(LEN).unwrap();
    let mut manual_dst = ManualBuffer::with_len(LEN).unwrap();

    let mut group = c.benchmark_group("copy_assign_10k");
    group.bench_function("deep-copy", |b| {
        b.iter(|| {
            deep_dst.clone_from(black_box(&deep_src));
            black_box(deep_dst.at(0));
        });
    });
    group.bench_function("manual", |b| {
        b.iter(|| {
            manual_dst.clone_from(black_box(&manual_src));
            black_box(manual_dst.at(0));
        });
    });
    group.finish();
}

/// A move hands over the handle; no policy touches the elements.
fn bench_move_10k(c: &mut Criterion) {
    let mut unique = UniqueBuffer::with_len(LEN).unwrap();
    let mut shared = SharedBuffer::with_len(LEN).unwrap();

    let mut group = c.benchmark_group("move_10k");
    group.bench_function("unique", |b| {
        b.iter(|| {
            let moved = unique.take();
            unique = black_box(moved);
        });
    });
    group.bench_function("shared", |b| {
        b.iter(|| {
            let moved = shared.take();
            shared = black_box(moved);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_alloc_10k,
    bench_copy_10k,
    bench_copy_assign_10k,
    bench_move_10k
);
criterion_main!(benches);
