// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation operations.
//!
//! Measures the performance of:
//! - Swipe recognition (begin / translate / end)
//! - Clamped index stepping across a long track

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use sunwise::ui::state::{CarouselState, SwipeTracker, SWIPE_THRESHOLD};

/// Benchmark a full swipe cycle: begin, a burst of moves, release.
fn bench_swipe_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("swipe_cycle", |b| {
        b.iter(|| {
            let mut tracker = SwipeTracker::new();
            tracker.begin(200.0, false);
            for step in 0..120 {
                tracker.translate_to(200.0 - step as f32);
            }
            black_box(tracker.end(3, 7, SWIPE_THRESHOLD));
        });
    });

    group.finish();
}

/// Benchmark stepping a clamped track end to end and back.
fn bench_index_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("index_stepping", |b| {
        b.iter(|| {
            let mut track = CarouselState::new(1000);
            for _ in 0..1000 {
                track.next();
            }
            for _ in 0..1000 {
                track.previous();
            }
            black_box(track.index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_swipe_cycle, bench_index_stepping);
criterion_main!(benches);
