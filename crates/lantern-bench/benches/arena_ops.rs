//! Criterion micro-benchmarks for arena allocation and reuse.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lantern_arena::{Arena, FixedArena};
use lantern_bench::mixed_sizes;

const CAPACITY: usize = 64 * 1024;

fn bench_alloc_reset_cycle(c: &mut Criterion) {
    let sizes = mixed_sizes(256, 128, 42);
    let mut arena = Arena::new();
    arena.init(CAPACITY).unwrap();

    c.bench_function("arena_alloc_reset_cycle", |b| {
        b.iter(|| {
            arena.reset().unwrap();
            for &size in &sizes {
                black_box(arena.alloc(black_box(size)).unwrap());
            }
        })
    });
}

fn bench_alloc_aligned(c: &mut Criterion) {
    let sizes = mixed_sizes(256, 128, 42);
    let mut arena = Arena::new();
    arena.init(CAPACITY).unwrap();

    c.bench_function("arena_alloc_aligned_16", |b| {
        b.iter(|| {
            arena.reset().unwrap();
            for &size in &sizes {
                black_box(arena.alloc_aligned(black_box(size), 16).unwrap());
            }
        })
    });
}

fn bench_alloc_copy(c: &mut Criterion) {
    let payload = [0xABu8; 64];
    let mut arena = Arena::new();
    arena.init(CAPACITY).unwrap();

    c.bench_function("arena_alloc_copy_64b", |b| {
        b.iter(|| {
            arena.reset().unwrap();
            for _ in 0..256 {
                black_box(arena.alloc_copy(black_box(&payload)).unwrap());
            }
        })
    });
}

fn bench_fixed_arena(c: &mut Criterion) {
    let sizes = mixed_sizes(64, 48, 7);
    let mut arena = Box::new(FixedArena::<4096>::new());

    c.bench_function("fixed_arena_alloc_reset_cycle", |b| {
        b.iter(|| {
            arena.reset();
            for &size in &sizes {
                black_box(arena.alloc(black_box(size)).unwrap());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_alloc_reset_cycle,
    bench_alloc_aligned,
    bench_alloc_copy,
    bench_fixed_arena
);
criterion_main!(benches);
