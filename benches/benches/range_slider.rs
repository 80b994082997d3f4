// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_range_slider::mapper::position_to_value;
use understory_range_slider::{ContainerMetrics, GestureController, PointerEvent, SliderConfig};

fn slider() -> GestureController {
    let config = SliderConfig::range(0.0, 1_000.0, 0.5)
        .and_then(|c| c.with_min_range(10.0))
        .unwrap();
    let mut slider = GestureController::with_values(config, 250.0, 750.0);
    slider.set_metrics(ContainerMetrics::new(1_030.0, 30.0));
    slider
}

fn bench_position_to_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_slider/position_to_value");
    let positions: Vec<f64> = (0..4_096).map(|i| f64::from(i) * 0.27 - 40.0).collect();
    group.throughput(Throughput::Elements(positions.len() as u64));
    group.bench_function("sweep", |b| {
        b.iter(|| {
            for &px in &positions {
                black_box(position_to_value(px, 1_030.0, 30.0, 0.0, 1_000.0, 0.5));
            }
        });
    });
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_slider/drag");

    // Dense moves mostly land on the same step and exercise deduplication;
    // sparse moves commit on nearly every event.
    for (name, stride) in [("dense", 0.1_f64), ("sparse", 2.0)] {
        let moves: Vec<PointerEvent> = (0..2_048)
            .map(|i| PointerEvent::Move {
                page: Point::new(800.0 - f64::from(i) * stride, 40.0),
                touches: 1,
            })
            .collect();
        group.throughput(Throughput::Elements(moves.len() as u64));
        group.bench_with_input(BenchmarkId::new("moves", name), &moves, |b, moves| {
            b.iter_batched(
                slider,
                |mut slider| {
                    slider.handle_event(PointerEvent::Down {
                        local: Point::new(765.0, 20.0),
                        page: Point::new(765.0, 40.0),
                        touches: 1,
                    });
                    for &event in moves {
                        black_box(slider.handle_event(event));
                    }
                    slider.handle_event(PointerEvent::Up);
                    black_box(slider);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_position_to_value, bench_drag);
criterion_main!(benches);
