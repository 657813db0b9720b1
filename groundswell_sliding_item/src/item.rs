// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sliding row engine.

use core::fmt;

use groundswell_timing::Deadline;

use crate::{PanelLayout, PanelWidths, Side, SideFlags, SlidingState};

/// Fraction of each px that still moves the row once the drag is past the
/// revealed panel's width.
pub const ELASTIC_FACTOR: f64 = 0.55;

/// How far past the panel width a drag must carry, in logical px, to prime
/// the full-swipe action.
pub const SWIPE_MARGIN: f64 = 30.0;

/// How long a row stays awake after settling fully closed, in ms.
pub const DISABLE_DELAY_MS: u64 = 600;

/// Release speeds above this, in px/ms, settle by direction instead of
/// position.
pub const FAST_SWIPE_VELOCITY: f64 = 0.3;

/// Whether a released drag should settle shut rather than open.
///
/// The policy in one expression: a slow release settles by position (close
/// zone closes), a fast release settles by direction (moving back toward
/// closed closes, moving outward stays open regardless of position).
#[must_use]
pub fn swipe_should_reset(
    is_reset_direction: bool,
    is_moving_fast: bool,
    is_on_close_zone: bool,
) -> bool {
    (!is_moving_fast && is_on_close_zone) || (is_reset_direction && is_moving_fast)
}

/// What a release decided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideOutcome {
    /// Where the row settles: the revealed panel's signed width, or 0.0
    /// for closed.
    pub resting_point: f64,
    /// The side whose full-swipe action fired, when the release happened
    /// primed.
    pub swiped: Option<Side>,
}

/// Swipe-to-reveal engine for one list row.
///
/// Owns the row's open amount and interaction state; the host owns the
/// pointer (usually through a pan gesture) and the rendering. Open amounts
/// are signed: positive reveals the right panel (leftward drag), negative
/// reveals the left panel. Amounts beyond the revealed panel's width are
/// legal and decay by [`ELASTIC_FACTOR`], which is the rubber-band feel at
/// the end of the swipe.
///
/// Time enters only through the host's clock: `now_ms` on the mutating
/// calls, and [`tick`](Self::tick) to let the auto-disable delay elapse.
///
/// ```rust
/// use groundswell_sliding_item::{FixedPanels, SideFlags, SlidingItem};
///
/// let mut row = SlidingItem::new(FixedPanels::new(0.0, 100.0), SideFlags::RIGHT);
///
/// row.start_sliding(300.0);
/// assert_eq!(row.move_sliding(290.0, 0), None); // measurement tick
/// assert_eq!(row.move_sliding(240.0, 16), Some(60.0));
///
/// // A slow release past half the panel width settles open.
/// let outcome = row.end_sliding(0.0, 32);
/// assert_eq!(outcome.resting_point, 100.0);
/// assert!(row.is_open());
/// ```
pub struct SlidingItem<L: PanelLayout> {
    layout: L,
    sides: SideFlags,
    state: SlidingState,
    open_amount: f64,
    start_x: f64,
    widths: PanelWidths,
    widths_dirty: bool,
    disable_delay: Deadline,
}

impl<L: PanelLayout> fmt::Debug for SlidingItem<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingItem")
            .field("sides", &self.sides)
            .field("state", &self.state)
            .field("open_amount", &self.open_amount)
            .field("start_x", &self.start_x)
            .field("widths", &self.widths)
            .field("widths_dirty", &self.widths_dirty)
            .field("disable_delay", &self.disable_delay)
            .finish_non_exhaustive()
    }
}

impl<L: PanelLayout> SlidingItem<L> {
    /// A closed, disabled row with panels on `sides`, measured through
    /// `layout`.
    pub fn new(layout: L, sides: SideFlags) -> Self {
        Self {
            layout,
            sides,
            state: SlidingState::Disabled,
            open_amount: 0.0,
            start_x: 0.0,
            widths: PanelWidths::default(),
            widths_dirty: true,
            disable_delay: Deadline::idle(),
        }
    }

    /// Begins a drag with the pointer at `start_x`.
    ///
    /// Cancels a pending auto-disable. A fully closed row wakes up and
    /// marks its widths stale; a partially open row keeps its measurements
    /// and the recorded start is shifted by the open amount, so the drag
    /// resumes from where the row already is.
    pub fn start_sliding(&mut self, start_x: f64) {
        self.disable_delay.cancel();
        if self.open_amount == 0.0 {
            self.widths_dirty = true;
            self.state = SlidingState::Enabled;
        }
        self.start_x = start_x + self.open_amount;
    }

    /// Feeds a drag position.
    ///
    /// Returns the resulting open amount. The first move after a closed
    /// row wakes performs the deferred panel measurement instead and
    /// returns `None`, as do rows with no panels at all.
    pub fn move_sliding(&mut self, x: f64, now_ms: u64) -> Option<f64> {
        if self.widths_dirty {
            self.widths = self.layout.panel_widths();
            self.widths_dirty = false;
            return None;
        }
        let mut open_amount = self.start_x - x;
        if self.sides == SideFlags::RIGHT {
            open_amount = open_amount.max(0.0);
        } else if self.sides == SideFlags::LEFT {
            open_amount = open_amount.min(0.0);
        } else if self.sides.is_empty() {
            return None;
        }
        // Rubber-band past the revealed panel's width.
        if open_amount > self.widths.right {
            open_amount = self.widths.right + (open_amount - self.widths.right) * ELASTIC_FACTOR;
        } else if open_amount < -self.widths.left {
            open_amount = -self.widths.left + (open_amount + self.widths.left) * ELASTIC_FACTOR;
        }
        self.set_open_amount(open_amount, false, now_ms);
        Some(open_amount)
    }

    /// Ends the drag with the release velocity in px/ms.
    ///
    /// The row settles on the revealed panel's signed width, or on 0.0
    /// when [`swipe_should_reset`] says so: slow releases settle by
    /// position (inside half the panel width closes), fast ones by
    /// direction. A release while primed names the swiped side, whatever
    /// the resting point.
    pub fn end_sliding(&mut self, velocity: f64, now_ms: u64) -> SlideOutcome {
        let mut resting_point = if self.open_amount > 0.0 {
            self.widths.right
        } else {
            -self.widths.left
        };

        let is_reset_direction = (self.open_amount > 0.0) == !(velocity < 0.0);
        let is_moving_fast = velocity.abs() > FAST_SWIPE_VELOCITY;
        let is_on_close_zone = self.open_amount.abs() < (resting_point / 2.0).abs();
        if swipe_should_reset(is_reset_direction, is_moving_fast, is_on_close_zone) {
            resting_point = 0.0;
        }

        self.set_open_amount(resting_point, true, now_ms);
        SlideOutcome {
            resting_point,
            swiped: self.primed_side(),
        }
    }

    /// Settles the row shut immediately, as when a sibling opens or an
    /// action completes.
    pub fn close(&mut self, now_ms: u64) {
        self.set_open_amount(0.0, true, now_ms);
    }

    /// Advances the host clock.
    ///
    /// Returns `true` on the call where the auto-disable delay elapses and
    /// the row returns to [`SlidingState::Disabled`].
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.disable_delay.fire(now_ms) {
            self.state = SlidingState::Disabled;
            true
        } else {
            false
        }
    }

    /// The signed open amount in logical px.
    #[must_use]
    pub const fn open_amount(&self) -> f64 {
        self.open_amount
    }

    /// The interaction state.
    #[must_use]
    pub const fn state(&self) -> SlidingState {
        self.state
    }

    /// Whether any panel is showing at all.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open_amount != 0.0
    }

    /// Open amount as a signed fraction of the revealed panel's width.
    ///
    /// `1.0` means the right panel is exactly fully revealed; values past
    /// `±1.0` are elastic overdrag. Zero-width panels read as 0.0.
    #[must_use]
    pub fn sliding_ratio(&self) -> f64 {
        if self.open_amount > 0.0 && self.widths.right > 0.0 {
            self.open_amount / self.widths.right
        } else if self.open_amount < 0.0 && self.widths.left > 0.0 {
            self.open_amount / self.widths.left
        } else {
            0.0
        }
    }

    /// Borrows the layout probe.
    #[must_use]
    pub const fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutably borrows the layout probe.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    const fn primed_side(&self) -> Option<Side> {
        match self.state {
            SlidingState::Revealed { side, primed: true } => Some(side),
            _ => None,
        }
    }

    fn set_open_amount(&mut self, open_amount: f64, is_final: bool, now_ms: u64) {
        self.disable_delay.cancel();
        self.open_amount = open_amount;
        if !is_final {
            if open_amount > 0.0 {
                self.state = SlidingState::Revealed {
                    side: Side::Right,
                    primed: open_amount >= self.widths.right + SWIPE_MARGIN,
                };
            } else if open_amount < 0.0 {
                self.state = SlidingState::Revealed {
                    side: Side::Left,
                    primed: open_amount <= -self.widths.left - SWIPE_MARGIN,
                };
            }
        }
        if open_amount == 0.0 {
            self.disable_delay.arm(now_ms + DISABLE_DELAY_MS);
        }
    }
}
