// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use eventstrip_pipeline::{
    FilterPipeline, ManualClock, PipelineConfig, TimedEvent, ViewportSignal,
};

#[derive(Clone)]
struct Commit {
    id: u64,
    timestamp_ms: f64,
}

impl TimedEvent for Commit {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn timestamp_ms(&self) -> f64 {
        self.timestamp_ms
    }
}

fn history(count: u64) -> Vec<Commit> {
    (0..count)
        .map(|i| Commit {
            id: i,
            timestamp_ms: i as f64 * 3_600_000.0,
        })
        .collect()
}

fn bench_full_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/full_chain");

    // Throttle disabled so every iteration pays for a real recomputation.
    let config = PipelineConfig {
        throttle_interval_ms: 0.0,
        ..PipelineConfig::default()
    };
    let signal = ViewportSignal {
        camera_distance: 300.0,
        marker_position: 0.0,
    };

    for len in [500_u64, 2_000, 10_000] {
        let events = history(len);
        group.throughput(Throughput::Elements(len));

        group.bench_with_input(BenchmarkId::from_parameter(len), &events, |b, events| {
            let mut pipeline = FilterPipeline::new(config, ManualClock::new(0.0)).unwrap();
            b.iter(|| {
                pipeline.clock_mut().advance(1_000.0);
                black_box(pipeline.compute(events, signal));
            });
        });
    }

    group.finish();
}

fn bench_throttled_call(c: &mut Criterion) {
    // The cached path the render loop hits between real recomputations.
    let events = history(2_000);
    let signal = ViewportSignal {
        camera_distance: 300.0,
        marker_position: 0.0,
    };
    let mut pipeline =
        FilterPipeline::new(PipelineConfig::default(), ManualClock::new(0.0)).unwrap();
    pipeline.compute(&events, signal);

    c.bench_function("pipeline/throttled_call", |b| {
        b.iter(|| black_box(pipeline.compute(&events, signal)));
    });
}

criterion_group!(benches, bench_full_chain, bench_throttled_call);
criterion_main!(benches);
