#[cfg(feature = "serde")]
mod serde_impl {
    use crate::common::configure_criterion;
    use criterion::{criterion_group, Criterion};
    use feer::{Error, Outcome, SourceLocation};
    use std::hint::black_box;

    pub fn bench_serialize(c: &mut Criterion) {
        let mut group = c.benchmark_group("features/serde");

        let ok = Outcome::<Vec<u32>>::ok((0..32).collect());
        group.bench_function("serialize_ok", |b| {
            b.iter(|| black_box(serde_json::to_string(black_box(&ok))))
        });

        let site = SourceLocation::new("src/db.rs", 88, 13).with_function("db::query");
        let failed: Outcome<Vec<u32>> = Outcome::err(Error::at("deadlock detected", site));
        group.bench_function("serialize_err", |b| {
            b.iter(|| black_box(serde_json::to_string(black_box(&failed))))
        });

        group.finish();
    }

    criterion_group! {
        name = serde_benches;
        config = configure_criterion();
        targets = bench_serialize
    }
}

#[cfg(feature = "serde")]
pub use serde_impl::serde_benches;
