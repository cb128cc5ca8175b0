//! Benchmark for List traversals against `Vec`.
//!
//! All List operations are loops; these numbers show what that costs
//! relative to a contiguous buffer.

use adtkit::persistent::List;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// cons Benchmark
// =============================================================================

fn benchmark_cons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cons");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = List::nil();
                for index in 0..size {
                    list = List::cons(black_box(index), list);
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// fold Benchmark
// =============================================================================

fn benchmark_folds(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in [1000, 100_000] {
        let list: List<i64> = (0..size).collect();
        let vector: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("List::fold_left", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.fold_left(0, |sum, n| sum + n)));
        });

        group.bench_with_input(BenchmarkId::new("List::fold_right", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.fold_right(0, |n, sum| sum + n)));
        });

        group.bench_with_input(BenchmarkId::new("Vec::iter_sum", size), &vector, |bencher, vector| {
            bencher.iter(|| black_box(vector.iter().sum::<i64>()));
        });
    }

    group.finish();
}

// =============================================================================
// map/filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [1000, 100_000] {
        let list: List<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("map", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.map(|n| n * 2)));
        });

        group.bench_with_input(BenchmarkId::new("filter", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.filter(|n| n % 3 == 0)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_cons, benchmark_folds, benchmark_map_filter);

criterion_main!(benches);
