use criterion::{criterion_group, Criterion};
use fib_bench::Harness;

// The harness adds two clock reads and a range check around the call. With a trivial input
// this is almost all overhead.
fn measure_overhead(c: &mut Criterion) {
    let harness = Harness::default().input(1);
    c.bench_function("harness measure fibonacci 1", |b| {
        b.iter(|| harness.measure().unwrap())
    });
}

criterion_group!(benches, measure_overhead);
