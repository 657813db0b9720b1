// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-denominated countdowns and budgets.

/// A debounce measured in frames rather than milliseconds.
///
/// Scroll-end detection and similar "quiet period" checks count frames the
/// host drives, not wall-clock time. Re-arming resets the count, which is
/// the debounce: as long as fresh activity keeps re-arming the countdown,
/// it never reaches zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCountdown {
    remaining: Option<u32>,
}

impl FrameCountdown {
    /// An unarmed countdown.
    #[must_use]
    pub const fn idle() -> Self {
        Self { remaining: None }
    }

    /// Arms (or re-arms) the countdown to fire on the `frames`-th tick.
    ///
    /// `arm(0)` behaves like `arm(1)`: the next tick fires.
    pub fn arm(&mut self, frames: u32) {
        self.remaining = Some(frames);
    }

    /// Discards the countdown, if armed.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether the countdown is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advances one frame. Returns `true` on the tick the countdown elapses.
    pub fn tick(&mut self) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }
}

/// A cap on animation frame attempts.
///
/// Driven animations stop on a condition (velocity below a floor, progress
/// reaching 1.0). The budget bounds them from above so a host that keeps
/// pumping frames can never loop a stuck animation forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBudget {
    remaining: u32,
}

impl FrameBudget {
    /// A budget allowing `attempts` spends.
    #[must_use]
    pub const fn new(attempts: u32) -> Self {
        Self {
            remaining: attempts,
        }
    }

    /// Consumes one attempt. Returns `false` once the budget is exhausted.
    pub fn spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Attempts left.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether all attempts have been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
