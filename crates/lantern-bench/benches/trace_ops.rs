//! Criterion micro-benchmarks for trace recording and rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lantern_core::{CallSite, TraceSink};
use lantern_trace::TraceRing;

fn bench_record(c: &mut Criterion) {
    let sites: Vec<CallSite> = (0..64)
        .map(|line| CallSite::new("bench_op", "benches/trace_ops.rs", line))
        .collect();
    let mut ring = TraceRing::new();

    c.bench_function("trace_ring_record", |b| {
        b.iter(|| {
            for &site in &sites {
                ring.record(black_box(site));
            }
        })
    });
}

fn bench_write_to(c: &mut Criterion) {
    let mut ring = TraceRing::new();
    for line in 0..256 {
        ring.record(CallSite::new("bench_op", "benches/trace_ops.rs", line % 8));
    }
    let mut out = Vec::with_capacity(4096);

    c.bench_function("trace_ring_write_to", |b| {
        b.iter(|| {
            out.clear();
            ring.write_to(black_box(&mut out)).unwrap();
        })
    });
}

criterion_group!(benches, bench_record, bench_write_to);
criterion_main!(benches);
