use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use fib_bench::{fibonacci, INPUT};

fn recursive_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fibonacci");
    for n in [10u32, 15, 20, INPUT].iter() {
        group.bench_with_input(BenchmarkId::new("Recursive", n), n, |b, n| {
            b.iter(|| fibonacci(black_box(*n)));
        });
    }
    group.finish();
}

fn benchmark_input(c: &mut Criterion) {
    c.bench_function("fibonacci 25", |b| b.iter(|| fibonacci(black_box(INPUT))));
}

criterion_group!(fibonaccis, recursive_inputs, benchmark_input);
