// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use groundswell_gesture::{
    GestureArbiter, MotionSample, PanAxis, PanGesture, PanHandler, PanOptions, PanRecognizer,
};

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

/// A rightward drag with vertical jitter, sampled every 16ms.
fn stroke(moves: u32, seed: u64) -> Vec<MotionSample> {
    let mut rng = Lcg::new(seed);
    (0..moves)
        .map(|i| {
            MotionSample::new(
                100.0 + f64::from(i) * 3.0,
                200.0 + rng.jitter(4.0),
                u64::from(i) * 16,
            )
        })
        .collect()
}

struct Tally {
    moves: usize,
}

impl PanHandler for Tally {
    fn on_start(&mut self, _sample: &MotionSample) {}

    fn on_move(&mut self, _sample: &MotionSample) {
        self.moves += 1;
    }

    fn on_end(&mut self, _sample: &MotionSample) {}
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("groundswell_gesture");
    group.sample_size(50);

    for &moves in &[16_u32, 256_u32] {
        group.bench_function(format!("recognizer_detect(moves={moves})"), |b| {
            b.iter_batched(
                || stroke(moves, 0x5EED_0000_0000_0001),
                |samples| {
                    let mut pan = PanRecognizer::new(PanAxis::X, 20.0, 40.0);
                    pan.start(samples[0].point);
                    let mut committed = false;
                    for sample in &samples {
                        committed |= pan.detect(sample.point);
                    }
                    black_box(committed);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("pan_session(moves={moves})"), |b| {
            b.iter_batched(
                || {
                    let mut arbiter = GestureArbiter::new();
                    let gesture = PanGesture::new(
                        &mut arbiter,
                        PanOptions::new("bench-pan").with_threshold(20.0),
                        Tally { moves: 0 },
                    );
                    (arbiter, gesture, stroke(moves, 0x5EED_0000_0000_0002))
                },
                |(mut arbiter, mut gesture, samples)| {
                    gesture.pointer_down(&mut arbiter, samples[0]);
                    for &sample in &samples[1..] {
                        gesture.pointer_move(&mut arbiter, sample);
                    }
                    let last = samples[samples.len() - 1];
                    let lift = MotionSample::new(last.x(), last.y(), last.time_ms + 16);
                    gesture.pointer_up(&mut arbiter, lift);
                    black_box(gesture.handler().moves);
                },
                BatchSize::LargeInput,
            );
        });
    }

    for &rivals in &[4_u32, 32_u32] {
        group.bench_function(format!("arbitration(rivals={rivals})"), |b| {
            b.iter_batched(
                || {
                    let mut arbiter = GestureArbiter::new();
                    let ids: Vec<_> = (0..rivals)
                        .map(|i| arbiter.register("bench-rival", i as i32))
                        .collect();
                    (arbiter, ids)
                },
                |(mut arbiter, ids)| {
                    for &id in &ids {
                        arbiter.request_start(id);
                    }
                    let winner = ids[ids.len() - 1];
                    let granted = arbiter.request_capture(winner);
                    arbiter.release(winner);
                    black_box(granted);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
