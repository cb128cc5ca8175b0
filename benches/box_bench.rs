//! Benchmark for eager `Boxed` pipelines against deferred `LazyBox` pipelines.

use adtkit::control::{Boxed, LazyBox};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("discount_pipeline");

    group.bench_function("Boxed", |bencher| {
        bencher.iter(|| {
            Boxed::new(black_box("$100"))
                .map(|text| text.replace('$', ""))
                .map(|text| text.parse::<f64>().unwrap_or(0.0))
                .map(|cost| cost - cost * 0.25)
                .fold(|total| total)
        });
    });

    group.bench_function("LazyBox/build_and_fold", |bencher| {
        bencher.iter(|| {
            LazyBox::new(|| black_box("$100"))
                .map(|text| text.replace('$', ""))
                .map(|text| text.parse::<f64>().unwrap_or(0.0))
                .map(|cost| cost - cost * 0.25)
                .fold(|total| total)
        });
    });

    let prebuilt = LazyBox::new(|| black_box("$100"))
        .map(|text| text.replace('$', ""))
        .map(|text| text.parse::<f64>().unwrap_or(0.0))
        .map(|cost| cost - cost * 0.25);

    group.bench_function("LazyBox/fold_only", |bencher| {
        bencher.iter(|| prebuilt.fold(|total| total));
    });

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);

criterion_main!(benches);
