// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding between the row engine and the pan gesture lifecycle.

use core::fmt;

use groundswell_gesture::{MotionSample, PanHandler, VelocityWindow};

use crate::{PanelLayout, SlideOutcome, SlidingItem};

/// Drives a [`SlidingItem`] from a pan gesture.
///
/// Implements [`PanHandler`] so it can sit directly inside a
/// `groundswell_gesture::PanGesture`: the capture sample starts the slide,
/// captured moves feed it, and the release settles it using the velocity
/// measured over the drag's own samples. The settle decision is kept in
/// [`take_outcome`](Self::take_outcome) for the host to act on (fire the
/// swiped action, notify a roster).
pub struct SlidingItemHandler<L: PanelLayout> {
    item: SlidingItem<L>,
    velocity: VelocityWindow,
    last_outcome: Option<SlideOutcome>,
    disabled: bool,
}

impl<L: PanelLayout> fmt::Debug for SlidingItemHandler<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingItemHandler")
            .field("velocity", &self.velocity)
            .field("last_outcome", &self.last_outcome)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl<L: PanelLayout> SlidingItemHandler<L> {
    /// Wraps `item` for gesture dispatch.
    pub fn new(item: SlidingItem<L>) -> Self {
        Self {
            item,
            velocity: VelocityWindow::new(),
            last_outcome: None,
            disabled: false,
        }
    }

    /// Turns sliding off or back on. A disabled row vetoes new pan
    /// sessions; a drag already captured runs to completion.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the host has turned sliding off.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Borrows the row engine.
    #[must_use]
    pub const fn item(&self) -> &SlidingItem<L> {
        &self.item
    }

    /// Mutably borrows the row engine, for host-driven calls such as
    /// `close` and `tick`.
    pub fn item_mut(&mut self) -> &mut SlidingItem<L> {
        &mut self.item
    }

    /// The most recent settle decision, at most once per release.
    pub fn take_outcome(&mut self) -> Option<SlideOutcome> {
        self.last_outcome.take()
    }
}

impl<L: PanelLayout> PanHandler for SlidingItemHandler<L> {
    fn can_start(&mut self, _sample: &MotionSample) -> bool {
        !self.disabled
    }

    fn on_start(&mut self, sample: &MotionSample) {
        self.velocity.clear();
        self.velocity.push(sample.x(), sample.time_ms);
        self.item.start_sliding(sample.x());
    }

    fn on_move(&mut self, sample: &MotionSample) {
        self.velocity.push(sample.x(), sample.time_ms);
        let _ = self.item.move_sliding(sample.x(), sample.time_ms);
    }

    fn on_end(&mut self, sample: &MotionSample) {
        self.velocity.push(sample.x(), sample.time_ms);
        let velocity = self.velocity.velocity();
        self.last_outcome = Some(self.item.end_sliding(velocity, sample.time_ms));
    }
}
