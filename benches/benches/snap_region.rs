// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_snap::config::SnapConfig;
use understory_snap::geometry::StackedLayout;
use understory_snap::gesture::{TouchInput, WheelInput};
use understory_snap::jump::ScrollHint;
use understory_snap::region::SnapRegion;

fn layout(sections: usize) -> StackedLayout {
    StackedLayout::stacked(sections, 900.0, 900.0)
        .with_leading(1200.0)
        .with_trailing(1200.0)
}

fn offsets(layout: &StackedLayout, steps: usize) -> Vec<f64> {
    let max = layout.max_scroll();
    (0..steps)
        .map(|i| max * (i as f64) / (steps as f64))
        .collect()
}

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");
    for &n in &[4_usize, 32, 256] {
        for (name, config) in [
            ("midline", SnapConfig::default()),
            ("intersection", SnapConfig::lenient()),
        ] {
            let base = layout(n);
            let steps = offsets(&base, 512);
            group.throughput(Throughput::Elements(steps.len() as u64));
            group.bench_function(format!("{name}/n={n}"), |b| {
                b.iter_batched(
                    || {
                        let (region, _) = SnapRegion::attach(config, &base, Duration::ZERO).unwrap();
                        (region, base.clone())
                    },
                    |(mut region, mut l)| {
                        for (i, &offset) in steps.iter().enumerate() {
                            l.set_scroll_offset(offset);
                            let now = Duration::from_millis(i as u64 * 16);
                            black_box(region.refresh(&l, now));
                            black_box(region.sample_intersections(&l, now));
                        }
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_gesture_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");
    let base = StackedLayout::stacked(16, 900.0, 900.0);
    let events = 4_096_u64;
    group.throughput(Throughput::Elements(events));

    group.bench_function("wheel", |b| {
        b.iter_batched(
            || SnapRegion::attach(SnapConfig::default(), &base, Duration::ZERO).unwrap().0,
            |mut region| {
                let mut sink = |i: usize, h: ScrollHint| {
                    black_box((i, h));
                };
                for i in 0..events {
                    // 1 ms apart: most land inside a cooldown.
                    let now = Duration::from_millis(i);
                    let delta_y = if i % 64 < 48 { 100.0 } else { -100.0 };
                    black_box(region.on_wheel(WheelInput { delta_y }, now, &mut sink));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("touch", |b| {
        b.iter_batched(
            || SnapRegion::attach(SnapConfig::default(), &base, Duration::ZERO).unwrap().0,
            |mut region| {
                let mut sink = |i: usize, h: ScrollHint| {
                    black_box((i, h));
                };
                for i in 0..events {
                    let now = Duration::from_millis(i * 4);
                    if i % 16 == 0 {
                        region.on_touch_end();
                        region.on_touch_start(TouchInput { y: 600.0 });
                    }
                    let y = 600.0 - (i % 16) as f64 * 10.0;
                    black_box(region.on_touch_move(TouchInput { y }, now, &mut sink));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_refresh, bench_gesture_storm);
criterion_main!(benches);
