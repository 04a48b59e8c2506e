//! Benchmarks for the multi-dimensional range generator and the
//! Stream pipeline.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use seqtools::ranges;
use seqtools::stream::Stream;

fn bench_ranges(criterion: &mut Criterion) {
    criterion.bench_function("ranges 100x100x10", |bencher| {
        bencher.iter(|| {
            let mut checksum = 0i64;
            for coordinate in ranges!(100, 100, 10).into_iter().flatten() {
                checksum ^= coordinate[0] + coordinate[1] + coordinate[2];
            }
            black_box(checksum)
        });
    });

    criterion.bench_function("ranges 2d negative step", |bencher| {
        bencher.iter(|| {
            let mut checksum = 0i64;
            for coordinate in ranges!((0, 1_000), (1_000, 0, -1)).into_iter().flatten() {
                checksum ^= coordinate[0] * coordinate[1];
            }
            black_box(checksum)
        });
    });
}

fn bench_stream(criterion: &mut Criterion) {
    criterion.bench_function("stream filter-map-sum", |bencher| {
        bencher.iter(|| {
            let total: i64 = Stream::new(0..100_000i64)
                .filter(|value| value % 3 == 0)
                .map(|value| value * 2)
                .sum();
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_ranges, bench_stream);
criterion_main!(benches);
