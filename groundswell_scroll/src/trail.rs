// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recent position history for velocity estimation.

use smallvec::SmallVec;

/// Most samples a trail retains. Matches the inline capacity, so a trail
/// never allocates.
const TRAIL_CAPACITY: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrailSample {
    y: f64,
    x: f64,
    time_ms: u64,
}

/// Displacement across the retained window, oriented older-minus-newer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TrailMotion {
    pub(crate) moved_y: f64,
    pub(crate) moved_x: f64,
    pub(crate) elapsed_ms: u64,
}

/// Positions observed during the current interaction, in arrival order.
///
/// Holds the newest [`TRAIL_CAPACITY`] samples of one scroll and is cleared
/// when the next one starts. [`recent_motion`](Self::recent_motion) scans
/// backward from the newest sample to the oldest one still inside the
/// window.
#[derive(Clone, Debug, Default)]
pub(crate) struct PositionTrail {
    samples: SmallVec<[TrailSample; TRAIL_CAPACITY]>,
}

impl PositionTrail {
    pub(crate) fn new() -> Self {
        Self {
            samples: SmallVec::new(),
        }
    }

    /// Records a position. Timestamps must not decrease between pushes.
    /// Once [`TRAIL_CAPACITY`] samples are held, the oldest is dropped.
    pub(crate) fn push(&mut self, y: f64, x: f64, time_ms: u64) {
        if self.samples.len() == TRAIL_CAPACITY {
            self.samples.remove(0);
        }
        self.samples.push(TrailSample { y, x, time_ms });
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
    }

    /// Motion between the newest sample and the oldest sample still less
    /// than `window_ms` old. `None` without two usable samples or when
    /// they carry the same timestamp.
    pub(crate) fn recent_motion(&self, window_ms: u64) -> Option<TrailMotion> {
        let newest = *self.samples.last()?;
        let mut oldest = newest;
        for sample in self.samples.iter().rev().skip(1) {
            if newest.time_ms.saturating_sub(sample.time_ms) >= window_ms {
                break;
            }
            oldest = *sample;
        }
        let elapsed_ms = newest.time_ms.saturating_sub(oldest.time_ms);
        if elapsed_ms == 0 {
            return None;
        }
        Some(TrailMotion {
            moved_y: oldest.y - newest.y,
            moved_x: oldest.x - newest.x,
            elapsed_ms,
        })
    }
}
