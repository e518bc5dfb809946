use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sieves::{Atkin, CrossCheck, Eratosthenes, Limit};

const LIMIT: i64 = 1_000_000;

fn sieve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve-benchmark");
    let limit = Limit::new(LIMIT).unwrap();

    group.bench_function("eratosthenes", |b| {
        b.iter(|| {
            for p in Eratosthenes::from(black_box(limit)) {
                black_box(p);
            }
        })
    });

    group.bench_function("atkin", |b| {
        b.iter(|| {
            for p in Atkin::from(black_box(limit)) {
                black_box(p);
            }
        })
    });

    group.finish();
}

fn cross_check_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross-check-benchmark");
    let limit = Limit::new(LIMIT).unwrap();

    group.bench_function("sequential", |b| {
        b.iter(|| CrossCheck::sequential(black_box(limit)))
    });

    group.bench_function("parallel", |b| {
        b.iter(|| CrossCheck::parallel(black_box(limit)))
    });

    group.finish();
}

criterion_group!(benches, sieve_benchmark, cross_check_benchmark);
criterion_main!(benches);
