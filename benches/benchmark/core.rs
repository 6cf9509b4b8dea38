use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use feer::{fail, Error, MutOutcome, Outcome, RefOutcome, Status};
use std::hint::black_box;

pub fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/construction");

    group.bench_function("owned_ok", |b| b.iter(|| black_box(Outcome::<u64>::ok(black_box(42)))));

    group.bench_function("owned_err", |b| {
        b.iter(|| {
            let result: Outcome<u64> = Outcome::err(Error::new("connection pool exhausted"));
            black_box(result)
        })
    });

    group.bench_function("err_with_function", |b| {
        b.iter(|| black_box(fail!("query {} failed", black_box(17))))
    });

    group.bench_function("status_ok", |b| b.iter(|| black_box(feer::ok())));

    group.bench_function("status_err", |b| {
        b.iter(|| {
            let result = Status::err(Error::new("refused"));
            black_box(result)
        })
    });

    group.finish();
}

pub fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/access");

    let owned = Outcome::<String>::ok("payload".to_string());
    group.bench_function("owned_value", |b| b.iter(|| black_box(owned.value().len())));

    let failed: Outcome<String> = Outcome::err(Error::new("missing"));
    group.bench_function("value_or_fallback", |b| {
        b.iter(|| black_box(failed.value_or("fallback")))
    });

    let source = 7_u64;
    let shared = RefOutcome::ok(&source);
    group.bench_function("shared_value", |b| b.iter(|| black_box(*shared.value())));

    group.bench_function("exclusive_write_through", |b| {
        let mut target = 0_u64;
        b.iter(|| {
            let mut alias = MutOutcome::ok(&mut target);
            *alias.value_mut() += 1;
            black_box(alias.is_ok())
        })
    });

    group.finish();
}

pub fn bench_error_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/error_clone");

    for len in [8, 64, 512] {
        let err = Error::new("x".repeat(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &err, |b, err| {
            b.iter(|| black_box(err.clone()))
        });
    }

    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets = bench_construction, bench_access, bench_error_clone
}
