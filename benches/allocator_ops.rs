//! Allocation-path benchmarks: the stack region alone, the heap delegate
//! alone, and the composition on its fast (primary hit) and slow
//! (fallback) paths.

use std::hint::black_box;

use alloc_toolbox::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_allocate_free(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_free_64");

    group.bench_function("stack_region", |b| {
        let mut alloc = StackAllocator::<4096>::with_config(StackConfig::production())
            .expect("failed to create stack region");
        b.iter(|| {
            let mut block = alloc.allocate(black_box(64));
            // SAFETY: the block was just produced by `alloc`.
            unsafe { alloc.deallocate(&mut block) };
        });
    });

    group.bench_function("system_heap", |b| {
        let mut alloc = SystemAllocator::new();
        b.iter(|| {
            let mut block = alloc.allocate(black_box(64));
            // SAFETY: the block was just produced by `alloc`.
            unsafe { alloc.deallocate(&mut block) };
        });
    });

    group.bench_function("fallback_primary_hit", |b| {
        let mut alloc = FallbackAllocator::new(
            StackAllocator::<4096>::with_config(StackConfig::production())
                .expect("failed to create stack region"),
            SystemAllocator::new(),
        );
        b.iter(|| {
            let mut block = alloc.allocate(black_box(64));
            // SAFETY: the block was just produced by `alloc`.
            unsafe { alloc.deallocate(&mut block) };
        });
    });

    group.bench_function("fallback_miss", |b| {
        // A 16-byte primary never serves a 64-byte request, so every
        // iteration takes the routing-plus-heap path.
        let mut alloc = FallbackAllocator::new(
            StackAllocator::<16>::with_config(StackConfig::production())
                .expect("failed to create stack region"),
            SystemAllocator::new(),
        );
        b.iter(|| {
            let mut block = alloc.allocate(black_box(64));
            // SAFETY: the block was just produced by `alloc`.
            unsafe { alloc.deallocate(&mut block) };
        });
    });

    group.finish();
}

fn bench_migration(c: &mut Criterion) {
    c.bench_function("reallocate_migrating_256", |b| {
        let mut alloc = FallbackAllocator::new(
            StackAllocator::<64>::with_config(StackConfig::production())
                .expect("failed to create stack region"),
            SystemAllocator::new(),
        );
        b.iter(|| {
            let mut block = alloc.allocate(black_box(64));
            // SAFETY: the block was just produced by `alloc` and the
            // resize target outgrows the primary, forcing a migration.
            unsafe {
                alloc.reallocate(&mut block, black_box(256));
                alloc.deallocate(&mut block);
            }
        });
    });
}

criterion_group!(benches, bench_allocate_free, bench_migration);
criterion_main!(benches);
