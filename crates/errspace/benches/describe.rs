//! Resolution cost: table hits, platform fallback, and the raw slot.
//!
//! cargo bench -p errspace

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use errspace::codes::{ERR_AUTH_NET, ERR_CTLD_INVALID_JOB_ID};
use errspace::{describe, get_error, set_error, Registry};

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    group.bench_function("table_hit", |b| {
        b.iter(|| describe(black_box(ERR_CTLD_INVALID_JOB_ID)))
    });

    group.bench_function("table_last_entry", |b| b.iter(|| describe(black_box(ERR_AUTH_NET))));

    group.bench_function("platform_fallback", |b| b.iter(|| describe(black_box(2))));

    group.bench_function("platform_unknown", |b| b.iter(|| describe(black_box(77_777))));

    // Front-to-back scan of the same table, for comparison with the index.
    let reg = Registry::builtin();
    group.bench_function("linear_scan_last_entry", |b| {
        b.iter(|| {
            let code = black_box(ERR_AUTH_NET);
            reg.entries().iter().find(|e| e.code == code).map(|e| e.message)
        })
    });

    group.finish();
}

fn bench_state(c: &mut Criterion) {
    c.bench_function("set_get_error", |b| {
        b.iter(|| {
            set_error(black_box(ERR_CTLD_INVALID_JOB_ID));
            get_error()
        })
    });
}

criterion_group!(benches, bench_describe, bench_state);
criterion_main!(benches);
