// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use groundswell_gesture::MotionSample;
use groundswell_scroll::{ScrollTarget, ScrollView};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn jitter(&mut self, spread: f64) -> f64 {
        (f64::from(self.next_u32()) / f64::from(u32::MAX) - 0.5) * spread
    }
}

struct Surface {
    top: f64,
    left: f64,
    max_top: f64,
}

impl Surface {
    fn tall(max_top: f64) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            max_top,
        }
    }
}

impl ScrollTarget for Surface {
    fn scroll_top(&self) -> f64 {
        self.top
    }
    fn scroll_left(&self) -> f64 {
        self.left
    }
    fn set_scroll_top(&mut self, top: f64) {
        self.top = top;
    }
    fn set_scroll_left(&mut self, left: f64) {
        self.left = left;
    }
    fn max_scroll_top(&self) -> f64 {
        self.max_top
    }
    fn max_scroll_left(&self) -> f64 {
        0.0
    }
}

/// Finger samples for an upward fling, every 16ms.
fn fling_samples(moves: u32, seed: u64) -> Vec<MotionSample> {
    let mut rng = Lcg::new(seed);
    (0..moves)
        .map(|i| {
            MotionSample::new(
                rng.jitter(2.0),
                600.0 - f64::from(i) * 8.0,
                u64::from(i) * 16,
            )
        })
        .collect()
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("groundswell_scroll");
    group.sample_size(50);

    for &moves in &[8_u32, 64_u32] {
        group.bench_function(format!("kinetic_drag(moves={moves})"), |b| {
            b.iter_batched(
                || fling_samples(moves, 0x5C20_0000_0000_0001),
                |samples| {
                    let mut view = ScrollView::kinetic(Surface::tall(100_000.0));
                    view.touch_start(samples[0]);
                    for &sample in &samples[1..] {
                        view.touch_move(sample);
                    }
                    let last = samples[samples.len() - 1];
                    let lift = MotionSample::new(last.x(), last.y(), last.time_ms + 16);
                    black_box(view.touch_end(lift));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("glide_to_rest(moves=8)", |b| {
        b.iter_batched(
            || fling_samples(8, 0x5C20_0000_0000_0002),
            |samples| {
                let mut view = ScrollView::kinetic(Surface::tall(100_000.0));
                view.touch_start(samples[0]);
                for &sample in &samples[1..] {
                    view.touch_move(sample);
                }
                let last = samples[samples.len() - 1];
                let mut now = last.time_ms + 16;
                view.touch_end(MotionSample::new(last.x(), last.y(), now));
                while view.is_scrolling() {
                    now += 16;
                    view.frame(now);
                }
                black_box(view.record().scroll_top);
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("native_ticks(ticks=64)", |b| {
        b.iter_batched(
            || {
                let mut rng = Lcg::new(0x5C20_0000_0000_0003);
                (0..64_u32)
                    .map(|i| (f64::from(i) * 5.0 + rng.jitter(3.0), u64::from(i) * 16))
                    .collect::<Vec<_>>()
            },
            |ticks| {
                let mut view = ScrollView::native(Surface::tall(1_000_000.0));
                for &(top, at) in &ticks {
                    if let Some(surface) = view.target_mut() {
                        surface.top = top;
                    }
                    black_box(view.scroll_tick(at));
                }
                black_box(view.record().velocity_y);
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("eased_scroll_to(duration=480)", |b| {
        b.iter_batched(
            || {
                let mut view = ScrollView::native(Surface::tall(10_000.0));
                view.scroll_to(0.0, 5_000.0, 480, 0);
                view
            },
            |mut view| {
                let mut now = 0;
                while view.is_scrolling() {
                    now += 16;
                    view.frame(now);
                }
                black_box(view.target().map(|surface| surface.top));
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_scroll);
criterion_main!(benches);
