// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll engine: mode selection, velocity, momentum, eased scroll-to.

use core::fmt;

use bitflags::bitflags;
use groundswell_gesture::MotionSample;
use groundswell_timing::{FrameBudget, FrameCountdown, ease_out_cubic};
use kurbo::Vec2;

use crate::trail::PositionTrail;
use crate::{HorizontalMotion, ScrollRecord, VerticalMotion};

/// Per-frame multiplier applied to the glide velocity.
pub const DECELERATION_FRICTION: f64 = 0.97;

/// Release velocities at or below this, in px per frame, do not glide.
pub const MIN_VELOCITY_START_DECELERATION: f64 = 4.0;

/// The glide stops once its velocity magnitude falls below this, in px per
/// frame.
pub const MIN_VELOCITY_CONTINUE_DECELERATION: f64 = 0.12;

/// Quiet frames before a native scroll is considered ended.
pub const SCROLL_END_DEBOUNCE_FRAMES: u32 = 6;

/// Duration of one nominal 60Hz frame in ms; velocities are px per frame.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// How far back the velocity estimate looks, in ms.
const VELOCITY_WINDOW_MS: u64 = 100;

/// Eased scrolls shorter than this apply their target immediately.
const MIN_EASED_DURATION_MS: u64 = 32;

/// The scrollable surface a [`ScrollView`] drives.
///
/// Offsets grow downward and rightward from zero. Implementations may be
/// a platform's native offsets or a transform-based synthetic offset; the
/// engine cannot tell the difference. `max_scroll_top`/`max_scroll_left`
/// are the largest meaningful offsets and must be non-negative.
pub trait ScrollTarget {
    /// Current vertical offset.
    fn scroll_top(&self) -> f64;
    /// Current horizontal offset.
    fn scroll_left(&self) -> f64;
    /// Writes the vertical offset.
    fn set_scroll_top(&mut self, top: f64);
    /// Writes the horizontal offset.
    fn set_scroll_left(&mut self, left: f64);
    /// Largest meaningful vertical offset.
    fn max_scroll_top(&self) -> f64;
    /// Largest meaningful horizontal offset.
    fn max_scroll_left(&self) -> f64;
}

bitflags! {
    /// What a scroll operation observed, for the host to act on.
    ///
    /// The host reads [`ScrollView::record`] synchronously when a signal is
    /// set; the record describes that moment only.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ScrollSignals: u8 {
        /// A scroll began on this tick. May co-occur with `SCROLLED`.
        const STARTED = 1 << 0;
        /// The offset moved on this tick.
        const SCROLLED = 1 << 1;
        /// The scroll came to rest: the end debounce elapsed, the glide
        /// ran out, or a touch released without enough velocity.
        const ENDED = 1 << 2;
        /// An eased `scroll_to` completed, normally or through its safety
        /// valves. At most once per `scroll_to`.
        const SCROLL_TO_DONE = 1 << 3;
    }
}

#[derive(Clone, Debug)]
struct EasedScroll {
    from_x: f64,
    from_y: f64,
    to_x: f64,
    to_y: f64,
    duration_ms: u64,
    started_at_ms: Option<u64>,
    budget: FrameBudget,
}

/// Scroll engine for one scrollable surface.
///
/// The mode is fixed at construction and never changes. A *native* view
/// trusts the platform to move the offset and only observes it:
/// [`scroll_tick`](Self::scroll_tick) on every platform scroll
/// notification, [`frame`](Self::frame) on every display frame for the
/// end debounce. A *kinetic* view owns the offset itself: touches move it
/// directly and a released drag glides on under friction, one
/// `frame` at a time, until the velocity runs out or a boundary stops it.
///
/// Either mode can run an eased [`scroll_to`](Self::scroll_to), driven by
/// the same `frame` calls. The engine never spawns timers; hosts feed a
/// millisecond clock and frame ticks, which keeps the physics
/// deterministic under test.
///
/// ```rust
/// use groundswell_gesture::MotionSample;
/// use groundswell_scroll::{ScrollSignals, ScrollTarget, ScrollView};
///
/// struct Surface {
///     top: f64,
/// }
///
/// impl ScrollTarget for Surface {
///     fn scroll_top(&self) -> f64 {
///         self.top
///     }
///     fn scroll_left(&self) -> f64 {
///         0.0
///     }
///     fn set_scroll_top(&mut self, top: f64) {
///         self.top = top;
///     }
///     fn set_scroll_left(&mut self, _left: f64) {}
///     fn max_scroll_top(&self) -> f64 {
///         2_000.0
///     }
///     fn max_scroll_left(&self) -> f64 {
///         0.0
///     }
/// }
///
/// let mut view = ScrollView::kinetic(Surface { top: 0.0 });
///
/// // Dragging the finger up scrolls the content down.
/// view.touch_start(MotionSample::new(0.0, 400.0, 0));
/// let signals = view.touch_move(MotionSample::new(0.0, 360.0, 16));
/// assert!(signals.contains(ScrollSignals::STARTED | ScrollSignals::SCROLLED));
/// assert_eq!(view.record().scroll_top, 40.0);
///
/// // A fast enough release glides on under friction.
/// let signals = view.touch_end(MotionSample::new(0.0, 320.0, 32));
/// assert!(!signals.contains(ScrollSignals::ENDED));
/// assert!(view.is_scrolling());
/// assert!(view.frame(48).contains(ScrollSignals::SCROLLED));
/// ```
pub struct ScrollView<T: ScrollTarget> {
    target: Option<T>,
    kinetic: bool,
    record: ScrollRecord,
    trail: PositionTrail,
    end_debounce: FrameCountdown,
    eased: Option<EasedScroll>,
    decelerating: bool,
    touch_active: bool,
    touch_top: f64,
    touch_y: f64,
}

impl<T: ScrollTarget> fmt::Debug for ScrollView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollView")
            .field("kinetic", &self.kinetic)
            .field("record", &self.record)
            .field("trail", &self.trail)
            .field("end_debounce", &self.end_debounce)
            .field("eased", &self.eased)
            .field("decelerating", &self.decelerating)
            .field("touch_active", &self.touch_active)
            .field("touch_top", &self.touch_top)
            .field("touch_y", &self.touch_y)
            .finish_non_exhaustive()
    }
}

impl<T: ScrollTarget> ScrollView<T> {
    /// A view that observes platform-driven scrolling on `target`.
    pub fn native(target: T) -> Self {
        Self::with_mode(target, false)
    }

    /// A view that moves `target` itself from touches, with momentum.
    /// Kinetic scrolling is vertical.
    pub fn kinetic(target: T) -> Self {
        Self::with_mode(target, true)
    }

    fn with_mode(target: T, kinetic: bool) -> Self {
        Self {
            target: Some(target),
            kinetic,
            record: ScrollRecord::default(),
            trail: PositionTrail::new(),
            end_debounce: FrameCountdown::default(),
            eased: None,
            decelerating: false,
            touch_active: false,
            touch_top: 0.0,
            touch_y: 0.0,
        }
    }

    /// Whether this view owns the offset (kinetic) or observes it.
    #[must_use]
    pub const fn is_kinetic(&self) -> bool {
        self.kinetic
    }

    /// The current motion snapshot.
    #[must_use]
    pub const fn record(&self) -> &ScrollRecord {
        &self.record
    }

    /// Whether a scroll is in progress.
    #[must_use]
    pub const fn is_scrolling(&self) -> bool {
        self.record.is_scrolling
    }

    /// Current velocity in px per frame, horizontal then vertical.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        Vec2::new(self.record.velocity_x, self.record.velocity_y)
    }

    /// Borrows the target surface, unless detached.
    #[must_use]
    pub const fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Mutably borrows the target surface, unless detached.
    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    /// Takes the target away, as when the host surface is torn down.
    ///
    /// In-flight animations notice on their next frame and complete
    /// exactly once, silently.
    pub fn detach(&mut self) -> Option<T> {
        self.target.take()
    }

    /// Installs a target, returning the previous one if any.
    pub fn attach(&mut self, target: T) -> Option<T> {
        self.target.replace(target)
    }

    /// Feeds one platform scroll notification (native mode only).
    ///
    /// The first tick of an interaction reports `STARTED` and baselines
    /// the start offsets; every tick reports `SCROLLED` with deltas and a
    /// velocity measured over the recent window, and re-arms the end
    /// debounce that [`frame`](Self::frame) counts down.
    pub fn scroll_tick(&mut self, now_ms: u64) -> ScrollSignals {
        let mut signals = ScrollSignals::empty();
        if self.kinetic {
            return signals;
        }
        let Some(target) = self.target.as_ref() else {
            return signals;
        };
        let top = target.scroll_top();
        let left = target.scroll_left();
        self.record.time_ms = now_ms;
        self.record.scroll_top = top;
        self.record.scroll_left = left;
        if !self.record.is_scrolling {
            self.record.is_scrolling = true;
            self.record.start_y = top;
            self.record.start_x = left;
            self.record.delta_y = 0.0;
            self.record.delta_x = 0.0;
            self.record.velocity_y = 0.0;
            self.record.velocity_x = 0.0;
            self.trail.clear();
            signals |= ScrollSignals::STARTED;
        }
        self.trail.push(top, left, now_ms);
        self.record.delta_y = top - self.record.start_y;
        self.record.delta_x = left - self.record.start_x;
        if let Some(motion) = self.trail.recent_motion(VELOCITY_WINDOW_MS) {
            let elapsed = motion.elapsed_ms as f64;
            self.record.velocity_y = motion.moved_y / elapsed * FRAME_MS;
            self.record.velocity_x = motion.moved_x / elapsed * FRAME_MS;
            self.record.direction_y = if motion.moved_y > 0.0 {
                VerticalMotion::Up
            } else {
                VerticalMotion::Down
            };
            if motion.moved_x != 0.0 {
                self.record.direction_x = Some(if motion.moved_x > 0.0 {
                    HorizontalMotion::Left
                } else {
                    HorizontalMotion::Right
                });
            }
        }
        self.end_debounce.arm(SCROLL_END_DEBOUNCE_FRAMES);
        signals | ScrollSignals::SCROLLED
    }

    /// Opens a touch interaction (kinetic mode only).
    ///
    /// Cancels any in-flight glide or eased scroll; a finger landing on a
    /// gliding view catches it, and the scroll continues as one
    /// interaction rather than ending and restarting.
    pub fn touch_start(&mut self, sample: MotionSample) -> ScrollSignals {
        if !self.kinetic {
            return ScrollSignals::empty();
        }
        let Some(target) = self.target.as_ref() else {
            return ScrollSignals::empty();
        };
        self.decelerating = false;
        self.eased = None;
        self.touch_active = true;
        self.touch_top = target.scroll_top();
        self.touch_y = sample.y();
        self.record.scroll_top = self.touch_top;
        self.record.scroll_left = target.scroll_left();
        self.trail.clear();
        self.trail.push(sample.y(), sample.x(), sample.time_ms);
        ScrollSignals::empty()
    }

    /// Applies a touch movement to the offset (kinetic mode only).
    ///
    /// The finger delta moves the offset, clamped to
    /// `[0, max_scroll_top]`. The first effective move of an interaction
    /// reports `STARTED`.
    pub fn touch_move(&mut self, sample: MotionSample) -> ScrollSignals {
        let mut signals = ScrollSignals::empty();
        if !self.kinetic || !self.touch_active {
            return signals;
        }
        let Some(target) = self.target.as_mut() else {
            return signals;
        };
        self.record.time_ms = sample.time_ms;
        if !self.record.is_scrolling {
            self.record.is_scrolling = true;
            self.record.start_y = self.record.scroll_top;
            self.record.start_x = self.record.scroll_left;
            self.record.delta_y = 0.0;
            self.record.delta_x = 0.0;
            self.record.velocity_y = 0.0;
            self.record.velocity_x = 0.0;
            signals |= ScrollSignals::STARTED;
        }
        self.trail.push(sample.y(), sample.x(), sample.time_ms);
        let previous_top = self.record.scroll_top;
        let top = (self.touch_top + (self.touch_y - sample.y()))
            .max(0.0)
            .min(target.max_scroll_top());
        target.set_scroll_top(top);
        self.record.scroll_top = top;
        self.record.delta_y = top - self.record.start_y;
        if top < previous_top {
            self.record.direction_y = VerticalMotion::Up;
        } else if top > previous_top {
            self.record.direction_y = VerticalMotion::Down;
        }
        signals | ScrollSignals::SCROLLED
    }

    /// Closes a touch interaction (kinetic mode only).
    ///
    /// Computes the exit velocity over the recent window. Fast enough
    /// releases start the friction glide, which subsequent
    /// [`frame`](Self::frame) calls advance; anything else reports `ENDED`
    /// here. A touch that never moved reports nothing.
    pub fn touch_end(&mut self, sample: MotionSample) -> ScrollSignals {
        let mut signals = ScrollSignals::empty();
        if !self.kinetic || !self.touch_active {
            return signals;
        }
        self.touch_active = false;
        if !self.record.is_scrolling {
            self.trail.clear();
            return signals;
        }
        self.trail.push(sample.y(), sample.x(), sample.time_ms);
        self.record.time_ms = sample.time_ms;
        let exit_velocity = self
            .trail
            .recent_motion(VELOCITY_WINDOW_MS)
            .map_or(0.0, |motion| motion.moved_y / (motion.elapsed_ms as f64) * FRAME_MS);
        self.trail.clear();
        if exit_velocity.abs() > MIN_VELOCITY_START_DECELERATION {
            self.record.velocity_y = exit_velocity;
            self.record.direction_y = if exit_velocity < 0.0 {
                VerticalMotion::Up
            } else {
                VerticalMotion::Down
            };
            self.decelerating = true;
        } else {
            settle(&mut self.record);
            signals |= ScrollSignals::ENDED;
        }
        signals
    }

    /// Advances one display frame.
    ///
    /// Steps whichever animation is in flight (an eased scroll or the
    /// momentum glide) and counts down the native end debounce.
    pub fn frame(&mut self, now_ms: u64) -> ScrollSignals {
        let mut signals = self.eased_frame(now_ms);
        signals |= self.glide_frame(now_ms);
        if self.end_debounce.tick() {
            settle(&mut self.record);
            signals |= ScrollSignals::ENDED;
        }
        signals
    }

    /// Starts an eased scroll toward `(x, y)`, or jumps there for
    /// durations under 32ms.
    ///
    /// The interpolation is cubic ease-out, driven by
    /// [`frame`](Self::frame) and capped by a frame-attempt budget so it
    /// always terminates. A detached target or an exhausted budget
    /// completes silently; `SCROLL_TO_DONE` is reported exactly once
    /// either way. Starting another `scroll_to` (or a new touch) replaces
    /// an in-flight one, which then never completes.
    pub fn scroll_to(&mut self, x: f64, y: f64, duration_ms: u64, now_ms: u64) -> ScrollSignals {
        // One writer at a time: a programmatic scroll supersedes a glide.
        self.decelerating = false;
        self.eased = None;
        self.end_debounce.cancel();
        settle(&mut self.record);
        let Some(target) = self.target.as_mut() else {
            return ScrollSignals::SCROLL_TO_DONE;
        };
        if duration_ms < MIN_EASED_DURATION_MS {
            target.set_scroll_top(y);
            target.set_scroll_left(x);
            self.record.time_ms = now_ms;
            self.record.scroll_top = target.scroll_top();
            self.record.scroll_left = target.scroll_left();
            return ScrollSignals::SCROLL_TO_DONE;
        }
        let budget_frames = u32::try_from(duration_ms / 16)
            .unwrap_or(u32::MAX)
            .saturating_add(100);
        self.eased = Some(EasedScroll {
            from_x: target.scroll_left(),
            from_y: target.scroll_top(),
            to_x: x,
            to_y: y,
            duration_ms,
            started_at_ms: None,
            budget: FrameBudget::new(budget_frames),
        });
        self.record.is_scrolling = true;
        ScrollSignals::empty()
    }

    /// Eases to the top-left corner.
    pub fn scroll_to_top(&mut self, duration_ms: u64, now_ms: u64) -> ScrollSignals {
        self.scroll_to(0.0, 0.0, duration_ms, now_ms)
    }

    /// Eases to the bottom of the scrollable range.
    pub fn scroll_to_bottom(&mut self, duration_ms: u64, now_ms: u64) -> ScrollSignals {
        let bottom = self.target.as_ref().map_or(0.0, ScrollTarget::max_scroll_top);
        self.scroll_to(0.0, bottom, duration_ms, now_ms)
    }

    /// Halts everything in flight without reporting any signal.
    pub fn stop(&mut self) {
        self.decelerating = false;
        self.eased = None;
        self.end_debounce.cancel();
        settle(&mut self.record);
    }

    fn eased_frame(&mut self, now_ms: u64) -> ScrollSignals {
        let Some(eased) = &mut self.eased else {
            return ScrollSignals::empty();
        };
        if !eased.budget.spend() {
            self.eased = None;
            settle(&mut self.record);
            return ScrollSignals::SCROLL_TO_DONE;
        }
        let Some(target) = self.target.as_mut() else {
            self.eased = None;
            settle(&mut self.record);
            return ScrollSignals::SCROLL_TO_DONE;
        };
        // The first frame baselines the clock; progress starts at zero.
        let started_at = *eased.started_at_ms.get_or_insert(now_ms);
        let progress = if eased.duration_ms == 0 {
            1.0
        } else {
            (now_ms.saturating_sub(started_at) as f64 / eased.duration_ms as f64).min(1.0)
        };
        let eased_t = ease_out_cubic(progress);
        let top = eased.from_y + (eased.to_y - eased.from_y) * eased_t;
        let left = eased.from_x + (eased.to_x - eased.from_x) * eased_t;
        target.set_scroll_top(top);
        target.set_scroll_left(left);
        self.record.time_ms = now_ms;
        self.record.scroll_top = top;
        self.record.scroll_left = left;
        if progress >= 1.0 {
            self.eased = None;
            settle(&mut self.record);
            return ScrollSignals::SCROLL_TO_DONE;
        }
        ScrollSignals::empty()
    }

    fn glide_frame(&mut self, now_ms: u64) -> ScrollSignals {
        if !self.decelerating {
            return ScrollSignals::empty();
        }
        let Some(target) = self.target.as_mut() else {
            // Target torn down mid-glide: halt and close out the scroll.
            self.decelerating = false;
            settle(&mut self.record);
            return ScrollSignals::ENDED;
        };
        self.record.velocity_y *= DECELERATION_FRICTION;
        let max = target.max_scroll_top();
        let top = (self.record.scroll_top + self.record.velocity_y).max(0.0).min(max);
        target.set_scroll_top(top);
        self.record.time_ms = now_ms;
        self.record.scroll_top = top;
        self.record.delta_y = top - self.record.start_y;
        self.record.direction_y = if self.record.velocity_y < 0.0 {
            VerticalMotion::Up
        } else {
            VerticalMotion::Down
        };
        let gliding = self.record.velocity_y.abs() > MIN_VELOCITY_CONTINUE_DECELERATION
            && top > 0.0
            && top < max;
        let mut signals = ScrollSignals::SCROLLED;
        if !gliding {
            self.decelerating = false;
            settle(&mut self.record);
            signals |= ScrollSignals::ENDED;
        }
        signals
    }
}

/// Brings the record to rest: velocities zeroed, deltas left alone.
fn settle(record: &mut ScrollRecord) {
    record.velocity_y = 0.0;
    record.velocity_x = 0.0;
    record.is_scrolling = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Surface {
        top: f64,
        left: f64,
        max_top: f64,
        max_left: f64,
    }

    impl Surface {
        fn tall(max_top: f64) -> Self {
            Self {
                top: 0.0,
                left: 0.0,
                max_top,
                max_left: 0.0,
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
            self.max_left
        }
    }

    fn sample(y: f64, time_ms: u64) -> MotionSample {
        MotionSample::new(0.0, y, time_ms)
    }

    /// Drives a kinetic view through a drag ending fast enough to glide:
    /// top goes 0 -> 120, exit velocity `120/64 * FRAME_MS` px/frame.
    fn fling(view: &mut ScrollView<Surface>) {
        view.touch_start(sample(500.0, 0));
        view.touch_move(sample(480.0, 16));
        view.touch_move(sample(440.0, 32));
        view.touch_move(sample(380.0, 48));
        let signals = view.touch_end(sample(380.0, 64));
        assert!(!signals.contains(ScrollSignals::ENDED));
        assert!(view.record().velocity_y > MIN_VELOCITY_START_DECELERATION);
    }

    #[test]
    fn native_first_tick_starts_and_baselines() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        view.target_mut().unwrap().top = 25.0;

        let signals = view.scroll_tick(0);
        assert!(signals.contains(ScrollSignals::STARTED | ScrollSignals::SCROLLED));
        assert_eq!(view.record().start_y, 25.0);
        assert_eq!(view.record().delta_y, 0.0);
        assert_eq!(view.record().velocity_y, 0.0);
        assert!(view.is_scrolling());

        view.target_mut().unwrap().top = 75.0;
        let signals = view.scroll_tick(16);
        assert!(!signals.contains(ScrollSignals::STARTED));
        assert!(signals.contains(ScrollSignals::SCROLLED));
        assert_eq!(view.record().delta_y, 50.0);
    }

    #[test]
    fn native_velocity_uses_only_the_recent_window() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        let ticks = [(0.0, 0), (4.0, 40), (30.0, 150), (70.0, 200)];
        for (top, time) in ticks {
            view.target_mut().unwrap().top = top;
            view.scroll_tick(time);
        }
        // t=40 is over a window old at t=200; motion is 30 -> 70 over 50ms.
        assert_eq!(view.record().velocity_y, -40.0 / 50.0 * FRAME_MS);
        assert_eq!(view.record().direction_y, VerticalMotion::Down);
        assert_eq!(view.record().delta_y, 70.0);
    }

    #[test]
    fn native_end_fires_after_six_quiet_frames() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        view.scroll_tick(0);
        view.target_mut().unwrap().top = 50.0;
        view.scroll_tick(16);
        assert!(view.record().velocity_y != 0.0);

        for frame in 0..5_u64 {
            let signals = view.frame(32 + frame * 16);
            assert!(!signals.contains(ScrollSignals::ENDED));
        }
        let signals = view.frame(112);
        assert!(signals.contains(ScrollSignals::ENDED));
        assert!(!view.is_scrolling());
        assert_eq!(view.record().velocity_y, 0.0);
        assert_eq!(view.record().delta_y, 50.0, "deltas are left alone");
    }

    #[test]
    fn native_ticks_rearm_the_end_debounce() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        view.scroll_tick(0);
        for frame in 0..5_u64 {
            assert!(!view.frame(frame * 16).contains(ScrollSignals::ENDED));
        }
        view.scroll_tick(90);
        for frame in 0..5_u64 {
            assert!(!view.frame(96 + frame * 16).contains(ScrollSignals::ENDED));
        }
        assert!(view.frame(180).contains(ScrollSignals::ENDED));
    }

    #[test]
    fn kinetic_touch_drag_moves_and_clamps() {
        let mut view = ScrollView::kinetic(Surface::tall(100.0));
        view.touch_start(sample(500.0, 0));

        let signals = view.touch_move(sample(470.0, 16));
        assert!(signals.contains(ScrollSignals::STARTED | ScrollSignals::SCROLLED));
        assert_eq!(view.record().scroll_top, 30.0);
        assert_eq!(view.target().unwrap().top, 30.0);
        assert_eq!(view.record().direction_y, VerticalMotion::Down);

        // Way past the bottom: clamped to the max offset.
        let signals = view.touch_move(sample(340.0, 32));
        assert!(!signals.contains(ScrollSignals::STARTED));
        assert_eq!(view.record().scroll_top, 100.0);

        // Way past the top: clamped to zero.
        view.touch_move(sample(680.0, 48));
        assert_eq!(view.record().scroll_top, 0.0);
        assert_eq!(view.record().direction_y, VerticalMotion::Up);
    }

    #[test]
    fn fast_release_starts_the_glide() {
        let mut view = ScrollView::kinetic(Surface::tall(5_000.0));
        fling(&mut view);
        assert_eq!(view.record().velocity_y, 120.0 / 64.0 * FRAME_MS);
        assert!(view.is_scrolling());
        assert_eq!(view.record().scroll_top, 120.0);
    }

    #[test]
    fn glide_applies_friction_each_frame() {
        let mut view = ScrollView::kinetic(Surface::tall(5_000.0));
        fling(&mut view);
        let exit = view.record().velocity_y;

        let signals = view.frame(80);
        assert!(signals.contains(ScrollSignals::SCROLLED));
        assert!(!signals.contains(ScrollSignals::ENDED));
        assert_eq!(view.record().velocity_y, exit * DECELERATION_FRICTION);
        assert_eq!(view.record().scroll_top, 120.0 + exit * DECELERATION_FRICTION);

        view.frame(96);
        assert_eq!(view.record().velocity_y, exit * DECELERATION_FRICTION * DECELERATION_FRICTION);
    }

    #[test]
    fn glide_stops_below_the_minimum_velocity() {
        let mut view = ScrollView::kinetic(Surface::tall(5_000.0));
        fling(&mut view);

        let mut frames = 0_u32;
        loop {
            frames += 1;
            let signals = view.frame(64 + u64::from(frames) * 16);
            assert!(signals.contains(ScrollSignals::SCROLLED));
            if signals.contains(ScrollSignals::ENDED) {
                break;
            }
            assert!(frames < 1_000, "the glide must terminate");
        }
        // 31.25 * 0.97^n drops below 0.12 at n = 183.
        assert_eq!(frames, 183);
        assert_eq!(view.record().velocity_y, 0.0);
        assert!(!view.is_scrolling());
        assert!(view.record().scroll_top < 5_000.0);
        assert!(view.frame(10_000).is_empty(), "the glide fired once");
    }

    #[test]
    fn glide_stops_at_the_boundary() {
        let mut view = ScrollView::kinetic(Surface::tall(300.0));
        fling(&mut view);

        let mut ended = ScrollSignals::empty();
        for frame in 1..=20_u64 {
            ended = view.frame(64 + frame * 16);
            if ended.contains(ScrollSignals::ENDED) {
                break;
            }
        }
        assert!(ended.contains(ScrollSignals::ENDED));
        assert_eq!(view.record().scroll_top, 300.0, "clamped to the boundary");
        assert_eq!(view.target().unwrap().top, 300.0);
    }

    #[test]
    fn slow_release_ends_immediately() {
        let mut view = ScrollView::kinetic(Surface::tall(1_000.0));
        view.touch_start(sample(500.0, 0));
        view.touch_move(sample(498.0, 16));
        view.touch_move(sample(496.0, 32));

        let signals = view.touch_end(sample(494.0, 82));
        assert!(signals.contains(ScrollSignals::ENDED));
        assert!(!view.is_scrolling());
        assert_eq!(view.record().velocity_y, 0.0);
        assert!(view.frame(100).is_empty(), "nothing left to animate");
    }

    #[test]
    fn exit_velocity_ignores_stale_motion() {
        let mut view = ScrollView::kinetic(Surface::tall(1_000.0));
        view.touch_start(sample(800.0, 0));
        view.touch_move(sample(798.0, 40));
        view.touch_move(sample(796.0, 150));
        view.touch_move(sample(760.0, 200));

        view.touch_end(sample(720.0, 260));
        // Only the burst inside the window counts: 40px over 60ms.
        assert_eq!(view.record().velocity_y, 40.0 / 60.0 * FRAME_MS);
    }

    #[test]
    fn touch_without_motion_reports_nothing() {
        let mut view = ScrollView::kinetic(Surface::tall(1_000.0));
        view.touch_start(sample(500.0, 0));
        let signals = view.touch_end(sample(500.0, 40));
        assert!(signals.is_empty());
        assert!(!view.is_scrolling());
        assert!(view.touch_move(sample(400.0, 80)).is_empty(), "touch is over");
    }

    #[test]
    fn catching_a_glide_continues_the_scroll() {
        let mut view = ScrollView::kinetic(Surface::tall(5_000.0));
        fling(&mut view);
        view.frame(80);
        let caught_at = view.record().scroll_top;

        // The finger lands: the glide halts where it is.
        view.touch_start(sample(400.0, 96));
        assert!(view.frame(112).is_empty());
        assert_eq!(view.record().scroll_top, caught_at);

        // Further dragging continues the same scroll, no new start.
        let signals = view.touch_move(sample(390.0, 128));
        assert!(!signals.contains(ScrollSignals::STARTED));
        assert!(signals.contains(ScrollSignals::SCROLLED));
        assert_eq!(view.record().scroll_top, caught_at + 10.0);
        assert_eq!(view.record().start_y, 0.0, "one interaction, one baseline");

        let signals = view.touch_end(sample(390.0, 192));
        assert!(signals.contains(ScrollSignals::ENDED));
    }

    #[test]
    fn short_scroll_to_jumps_immediately() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        let signals = view.scroll_to(0.0, 200.0, 16, 0);
        assert!(signals.contains(ScrollSignals::SCROLL_TO_DONE));
        assert_eq!(view.target().unwrap().top, 200.0);
        assert!(!view.is_scrolling());
        assert!(view.frame(16).is_empty());
    }

    #[test]
    fn eased_scroll_to_reaches_the_target_and_completes_once() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        assert!(view.scroll_to(0.0, 300.0, 300, 1_000).is_empty());
        assert!(view.is_scrolling());

        // First frame baselines the clock at zero progress.
        assert!(view.frame(1_000).is_empty());
        assert_eq!(view.target().unwrap().top, 0.0);

        // Halfway through, cubic ease-out has covered 87.5%.
        assert!(view.frame(1_150).is_empty());
        assert_eq!(view.target().unwrap().top, 262.5);

        let signals = view.frame(1_300);
        assert!(signals.contains(ScrollSignals::SCROLL_TO_DONE));
        assert_eq!(view.target().unwrap().top, 300.0);
        assert!(!view.is_scrolling());

        assert!(view.frame(1_316).is_empty(), "completion fires once");
    }

    #[test]
    fn eased_scroll_to_spends_its_frame_budget_and_gives_up() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        view.scroll_to(0.0, 300.0, 300, 0);

        // A clock that never advances: progress stays at zero until the
        // budget (300/16 + 100 = 118 frames) runs out.
        let mut done = 0;
        for _ in 0..200 {
            if view.frame(0).contains(ScrollSignals::SCROLL_TO_DONE) {
                done += 1;
            }
        }
        assert_eq!(done, 1, "silent completion, exactly once");
        assert_eq!(view.target().unwrap().top, 0.0, "never reached the target");
    }

    #[test]
    fn detach_mid_eased_scroll_completes_exactly_once() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        view.scroll_to(0.0, 300.0, 300, 1_000);
        view.frame(1_000);

        let surface = view.detach();
        assert!(surface.is_some());
        assert!(view.frame(1_016).contains(ScrollSignals::SCROLL_TO_DONE));
        assert!(view.frame(1_032).is_empty());
    }

    #[test]
    fn detach_mid_glide_ends_the_scroll() {
        let mut view = ScrollView::kinetic(Surface::tall(5_000.0));
        fling(&mut view);
        view.detach();
        assert!(view.frame(80).contains(ScrollSignals::ENDED));
        assert!(view.frame(96).is_empty());
    }

    #[test]
    fn scroll_to_on_a_detached_view_completes_immediately() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        view.detach();
        let signals = view.scroll_to(0.0, 100.0, 300, 0);
        assert!(signals.contains(ScrollSignals::SCROLL_TO_DONE));
    }

    #[test]
    fn new_touch_cancels_an_eased_scroll_without_completion() {
        let mut view = ScrollView::kinetic(Surface::tall(1_000.0));
        view.scroll_to(0.0, 300.0, 300, 0);
        view.frame(0);

        view.touch_start(sample(500.0, 16));
        for frame in 1..=10_u64 {
            assert!(
                !view.frame(frame * 16).contains(ScrollSignals::SCROLL_TO_DONE),
                "a replaced scroll never completes"
            );
        }
    }

    #[test]
    fn scroll_to_supersedes_a_glide() {
        let mut view = ScrollView::kinetic(Surface::tall(5_000.0));
        fling(&mut view);

        let signals = view.scroll_to(0.0, 0.0, 16, 80);
        assert!(signals.contains(ScrollSignals::SCROLL_TO_DONE));
        assert_eq!(view.target().unwrap().top, 0.0);
        assert!(!view.is_scrolling());
        assert!(view.frame(96).is_empty(), "the glide was cancelled");
    }

    #[test]
    fn scroll_to_bottom_targets_the_max_offset() {
        let mut view = ScrollView::native(Surface::tall(1_234.0));
        view.scroll_to_bottom(0, 0);
        assert_eq!(view.target().unwrap().top, 1_234.0);

        view.scroll_to_top(0, 16);
        assert_eq!(view.target().unwrap().top, 0.0);
    }

    #[test]
    fn stop_halts_everything_silently() {
        let mut view = ScrollView::kinetic(Surface::tall(5_000.0));
        fling(&mut view);
        view.stop();
        assert!(!view.is_scrolling());
        assert_eq!(view.record().velocity_y, 0.0);
        assert!(view.frame(80).is_empty());

        view.scroll_to(0.0, 300.0, 300, 100);
        view.stop();
        assert!(view.frame(116).is_empty(), "no completion after stop");
    }

    #[test]
    fn inputs_for_the_other_mode_are_ignored() {
        let mut native = ScrollView::native(Surface::tall(1_000.0));
        assert!(native.touch_start(sample(500.0, 0)).is_empty());
        assert!(native.touch_move(sample(400.0, 16)).is_empty());
        assert!(native.touch_end(sample(400.0, 32)).is_empty());
        assert_eq!(native.record().scroll_top, 0.0);

        let mut kinetic = ScrollView::kinetic(Surface::tall(1_000.0));
        kinetic.target_mut().unwrap().top = 50.0;
        assert!(kinetic.scroll_tick(0).is_empty());
        assert!(!kinetic.is_scrolling());
    }

    #[test]
    fn velocity_accessor_pairs_the_axes() {
        let mut view = ScrollView::native(Surface::tall(1_000.0));
        view.scroll_tick(0);
        view.target_mut().unwrap().top = 30.0;
        view.target_mut().unwrap().left = 10.0;
        view.scroll_tick(20);
        let velocity = view.velocity();
        assert_eq!(velocity.y, view.record().velocity_y);
        assert_eq!(velocity.x, view.record().velocity_x);
        assert!(velocity.x != 0.0);
    }
}
