use criterion::criterion_main;

mod benchmarks;

criterion_main! {
    benchmarks::recursion::fibonaccis,
    benchmarks::harness_overhead::benches,
}
