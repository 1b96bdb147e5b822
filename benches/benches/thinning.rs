// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use eventstrip_thinning::thin;

fn bench_thin_over_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("thinning/over_budget");

    // Over-budget windows at realistic sizes; cap fixed at the default 300.
    for len in [1_000_usize, 5_000, 20_000] {
        let events: Vec<u64> = (0..len as u64).collect();
        let positions: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let marker = len as f64 / 2.0;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(events, positions),
            |b, (events, positions)| {
                b.iter(|| black_box(thin(events, positions, 300, marker)));
            },
        );
    }

    group.finish();
}

fn bench_thin_under_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("thinning/under_budget");

    // The fast path: the whole window fits the budget.
    let events: Vec<u64> = (0..200).collect();
    let positions: Vec<f64> = (0..200).map(f64::from).collect();
    group.throughput(Throughput::Elements(200));
    group.bench_function("200_of_300", |b| {
        b.iter(|| black_box(thin(&events, &positions, 300, 100.0)));
    });

    group.finish();
}

criterion_group!(benches, bench_thin_over_budget, bench_thin_under_budget);
criterion_main!(benches);
