//! Benchmarks for the asum dispatch paths.
//!
//! Run with: cargo bench --bench asum_bench
//! Compare with: cargo bench --features simd --bench asum_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use std::cell::Cell;
use std::time::Duration;
use strided_asum::{asum, map_slice};

fn make_data(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    StandardNormal.sample_iter(&mut rng).take(len).collect()
}

/// Contiguous (unrolled) path vs a naive iterator sum.
fn bench_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("asum_contiguous");
    group.sample_size(20);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for size in [1000, 10000, 100000, 1000000] {
        group.throughput(Throughput::Elements(size as u64));
        let x = make_data(size);

        group.bench_with_input(BenchmarkId::new("asum", size), &size, |bench, &n| {
            bench.iter(|| asum(n, black_box(&x), 1, 0))
        });

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, _| {
            bench.iter(|| black_box(&x).iter().map(|v| v.abs()).sum::<f64>())
        });
    }
    group.finish();
}

/// Non-unit strides over the same storage.
fn bench_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("asum_strided");
    group.sample_size(20);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let size = 1_000_000;
    let x = make_data(size);
    for stride in [2isize, 4, 16, -1] {
        let n = (size - 1) / stride.unsigned_abs() + 1;
        let offset = if stride < 0 { size - 1 } else { 0 };
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("stride", stride), &stride, |bench, &s| {
            bench.iter(|| asum(n, black_box(&x), s, offset))
        });
    }
    group.finish();
}

/// Accessor-mediated inputs against the equivalent slice.
fn bench_accessor(c: &mut Criterion) {
    let mut group = c.benchmark_group("asum_accessor");
    group.sample_size(20);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let size = 100000;
    let x = make_data(size);
    let cells: Vec<Cell<f64>> = x.iter().copied().map(Cell::new).collect();
    let mapped = map_slice(&x, |v: &f64| *v);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("slice", |bench| {
        bench.iter(|| asum(size, black_box(&x), 1, 0))
    });
    group.bench_function("cells", |bench| {
        bench.iter(|| asum::<f64, _>(size, black_box(&cells), 1, 0))
    });
    group.bench_function("map_slice", |bench| {
        bench.iter(|| asum(size, black_box(&mapped), 1, 0))
    });
    group.finish();
}

/// Zero stride is a single multiply regardless of `n`.
fn bench_zero_stride(c: &mut Criterion) {
    let x = make_data(16);
    c.bench_function("asum_zero_stride_1e6", |bench| {
        bench.iter(|| asum(black_box(1_000_000), &x, 0, 3))
    });
}

criterion_group!(
    benches,
    bench_contiguous,
    bench_strided,
    bench_accessor,
    bench_zero_stride
);
criterion_main!(benches);
