//! Benchmark tests for layout operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use layerviz_layout::{compute_layout, count_parameters, Topology};

fn bench_compute_layout(c: &mut Criterion) {
    let topology = Topology::new(vec![64, 128, 128, 128, 10]).expect("non-empty");

    c.bench_function("compute_layout_64_128x3_10", |b| {
        b.iter(|| compute_layout(black_box(&topology), black_box(3.0)))
    });
}

fn bench_connections(c: &mut Criterion) {
    let topology = Topology::new(vec![32, 64, 32]).expect("non-empty");
    let layout = compute_layout(&topology, 3.0).expect("valid spacing");

    c.bench_function("iterate_connections_32_64_32", |b| {
        b.iter(|| black_box(&layout).connections().count())
    });
}

fn bench_count_parameters(c: &mut Criterion) {
    let widths = vec![784, 512, 256, 128, 10];

    c.bench_function("count_parameters", |b| {
        b.iter(|| count_parameters(black_box(&widths)))
    });
}

criterion_group!(
    benches,
    bench_compute_layout,
    bench_connections,
    bench_count_parameters,
);
criterion_main!(benches);
