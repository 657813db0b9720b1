// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use groundswell_sliding_item::{FixedPanels, SideFlags, SlidingItem};

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

/// Finger x positions for a leftward reveal, sampled every 16ms.
fn drag(moves: u32, step: f64, seed: u64) -> Vec<(f64, u64)> {
    let mut rng = Lcg::new(seed);
    (0..moves)
        .map(|i| {
            (
                300.0 - f64::from(i) * step + rng.jitter(1.5),
                u64::from(i) * 16,
            )
        })
        .collect()
}

fn bench_sliding(c: &mut Criterion) {
    let mut group = c.benchmark_group("groundswell_sliding_item");
    group.sample_size(50);

    for &moves in &[16_u32, 128_u32] {
        group.bench_function(format!("reveal_drag(moves={moves})"), |b| {
            b.iter_batched(
                || drag(moves, 2.0, 0x0A11_0000_0000_0001),
                |positions| {
                    let mut row =
                        SlidingItem::new(FixedPanels::new(80.0, 100.0), SideFlags::BOTH);
                    row.start_sliding(300.0);
                    for &(x, at) in &positions {
                        black_box(row.move_sliding(x, at));
                    }
                    let (_, at) = positions[positions.len() - 1];
                    let outcome = row.end_sliding(-0.4, at + 16);
                    black_box(outcome.resting_point);
                },
                BatchSize::LargeInput,
            );
        });
    }

    // Steps of 4px push the row well past the panel width, so most moves
    // take the elastic branch.
    group.bench_function("elastic_overdrag(moves=64)", |b| {
        b.iter_batched(
            || drag(64, 4.0, 0x0A11_0000_0000_0002),
            |positions| {
                let mut row = SlidingItem::new(FixedPanels::new(0.0, 100.0), SideFlags::RIGHT);
                row.start_sliding(300.0);
                for &(x, at) in &positions {
                    black_box(row.move_sliding(x, at));
                }
                let (_, at) = positions[positions.len() - 1];
                let outcome = row.end_sliding(-0.4, at + 16);
                black_box(outcome.swiped);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_sliding);
criterion_main!(benches);
