use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use kobench::{run, BenchmarkConfig, KernelObject, SilentReporter};

fn bench_object_churn(c: &mut Criterion) {
    c.bench_function("kernel_object_alloc_and_work", |b| {
        let mut id = 0i64;
        b.iter(|| {
            let mut obj = KernelObject::boxed(black_box(id));
            obj.perform_work();
            id += 1;
            black_box(obj.get_data(0))
        })
    });
}

fn bench_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("benchmark_loop");

    for &slots in &[1usize, 100, 1000] {
        let config = BenchmarkConfig::new(100_000, slots, 10_000);
        group.bench_with_input(BenchmarkId::new("slots", slots), &config, |b, config| {
            b.iter(|| run(black_box(config), &mut SilentReporter).map(|o| o.total).ok())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_object_churn, bench_loop);
criterion_main!(benches);
