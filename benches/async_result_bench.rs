//! Benchmark for async result composition.
//!
//! Uses `criterion::to_async()` so runtime entry is batched per sample.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fallible::async_result::{AsyncResultExt, Pipeline, all, any, resolved};
use std::hint::black_box;

fn benchmark_all_any(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("all_any");

    for size in [10_usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("all_ok", size), &size, |bencher, &size| {
            bencher
                .to_async(&runtime)
                .iter(|| async move { all((0..size).map(|n| resolved(Ok::<_, ()>(n)))).await });
        });

        group.bench_with_input(BenchmarkId::new("any_last_ok", size), &size, |bencher, &size| {
            bencher.to_async(&runtime).iter(|| async move {
                any((0..size).map(|n| resolved(if n + 1 == size { Ok(n) } else { Err(n) }))).await
            });
        });
    }

    group.finish();
}

fn benchmark_lifted_combinators(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("lifted_combinators");

    group.bench_function("map_chain_flat_map", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            resolved(Ok::<_, String>(black_box(1)))
                .async_map(|n| n + 1)
                .chain(|n| Ok(n * 2))
                .async_flat_map(|n| async move { Ok(n - 1) })
                .await
        });
    });

    let pipeline = Pipeline::<u64, u64, String>::new()
        .then(|n| Ok(n + 1))
        .then_async(|n| async move { Ok(n * 2) })
        .then(|n| Ok(n - 1));
    group.bench_function("pipeline_three_steps", |bencher| {
        bencher.to_async(&runtime).iter(|| pipeline.run(black_box(20)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_all_any, benchmark_lifted_combinators);
criterion_main!(benches);
