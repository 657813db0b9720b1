// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples and rolling velocity estimation.

use kurbo::Point;

/// How many samples the velocity window retains.
const WINDOW_SIZE: usize = 20;

/// Samples older than this (relative to the newest) do not describe the
/// current motion and are ignored.
const HORIZON_MS: u64 = 100;

/// A gap this long between consecutive samples means the pointer stopped;
/// samples before the gap are ignored.
const ASSUME_STOPPED_MS: u64 = 40;

/// A single pointer position with its host timestamp.
///
/// Timestamps are milliseconds on whatever monotonic clock the host already
/// has; within one interaction they must not decrease.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Pointer position in the host's logical coordinate space.
    pub point: Point,
    /// When the sample was taken.
    pub time_ms: u64,
}

impl MotionSample {
    /// A sample at `(x, y)` taken at `time_ms`.
    #[must_use]
    pub const fn new(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            point: Point::new(x, y),
            time_ms,
        }
    }

    /// The horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.point.x
    }

    /// The vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.point.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample1D {
    position: f64,
    time_ms: u64,
}

/// Rolling estimate of recent 1D pointer velocity, in px/ms.
///
/// Keeps the last [`WINDOW_SIZE`] positions in a fixed ring and measures
/// displacement over time across the samples that still describe the
/// current motion: anything older than ~100ms, or separated from its
/// successor by a long enough gap to mean the pointer stopped, is ignored.
/// End-of-gesture consumers (swipe settle decisions, fling starts) read
/// [`velocity`](Self::velocity) once on release.
#[derive(Clone, Debug)]
pub struct VelocityWindow {
    samples: [Option<Sample1D>; WINDOW_SIZE],
    newest: usize,
}

impl Default for VelocityWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityWindow {
    /// An empty window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: [None; WINDOW_SIZE],
            newest: 0,
        }
    }

    /// Records a position. Timestamps must not decrease between pushes.
    pub fn push(&mut self, position: f64, time_ms: u64) {
        self.newest = (self.newest + 1) % WINDOW_SIZE;
        self.samples[self.newest] = Some(Sample1D { position, time_ms });
    }

    /// Forgets every sample. Call at the start of each interaction so a
    /// previous gesture's motion cannot leak into this one's velocity.
    pub fn clear(&mut self) {
        self.samples = [None; WINDOW_SIZE];
        self.newest = 0;
    }

    /// Velocity over the retained window, in px/ms.
    ///
    /// Zero when fewer than two samples are usable, or when they carry the
    /// same timestamp.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };
        let mut oldest = newest;
        let mut index = self.newest;
        loop {
            let prev = (index + WINDOW_SIZE - 1) % WINDOW_SIZE;
            if prev == self.newest {
                break;
            }
            let Some(sample) = self.samples[prev] else {
                break;
            };
            if newest.time_ms.saturating_sub(sample.time_ms) > HORIZON_MS {
                break;
            }
            if oldest.time_ms.saturating_sub(sample.time_ms) > ASSUME_STOPPED_MS {
                break;
            }
            oldest = sample;
            index = prev;
        }
        let elapsed = newest.time_ms.saturating_sub(oldest.time_ms);
        if elapsed == 0 {
            return 0.0;
        }
        (newest.position - oldest.position) / (elapsed as f64)
    }
}
