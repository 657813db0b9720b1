// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundswell_scroll --heading-base-level=0

//! Groundswell Scroll: the scroll engine behind scrollable content views.
//!
//! A scrollable surface is either *native*, where the platform moves the
//! offset and this crate only observes it, or *kinetic*, where the crate
//! owns the offset: touches drag it directly and a released drag glides
//! on under per-frame friction until it runs out of speed or road. Both
//! modes share the same velocity bookkeeping and the same eased
//! `scroll_to`. The mode is fixed when the view is built.
//!
//! The pieces are:
//!
//! - [`ScrollView`]: the engine, one per surface. Hosts feed it platform
//!   scroll notifications ([`scroll_tick`](ScrollView::scroll_tick)),
//!   touches ([`touch_start`](ScrollView::touch_start) and friends), and
//!   display frames ([`frame`](ScrollView::frame)); it answers with
//!   [`ScrollSignals`] saying what just happened.
//! - [`ScrollTarget`]: the seam to the actual surface. The engine reads
//!   and writes offsets through it and never learns what a surface is.
//! - [`ScrollRecord`]: the motion snapshot behind every signal: offsets,
//!   deltas from the interaction's start, velocity in px per frame, and
//!   travel directions.
//!
//! Nothing here spawns timers or threads. Time enters as `now_ms`
//! arguments and frames as explicit calls, so the physics run the same
//! under test as on a device.
//!
//! ## Minimal example
//!
//! ```rust
//! use groundswell_scroll::{ScrollSignals, ScrollTarget, ScrollView};
//!
//! struct Surface {
//!     top: f64,
//!     left: f64,
//! }
//!
//! impl ScrollTarget for Surface {
//!     fn scroll_top(&self) -> f64 {
//!         self.top
//!     }
//!     fn scroll_left(&self) -> f64 {
//!         self.left
//!     }
//!     fn set_scroll_top(&mut self, top: f64) {
//!         self.top = top;
//!     }
//!     fn set_scroll_left(&mut self, left: f64) {
//!         self.left = left;
//!     }
//!     fn max_scroll_top(&self) -> f64 {
//!         3_000.0
//!     }
//!     fn max_scroll_left(&self) -> f64 {
//!         0.0
//!     }
//! }
//!
//! // A native view observes offsets the platform moves.
//! let mut view = ScrollView::native(Surface { top: 0.0, left: 0.0 });
//! let signals = view.scroll_tick(0);
//! assert!(signals.contains(ScrollSignals::STARTED));
//!
//! // The platform scrolled down 40px; the record tracks it.
//! view.target_mut().unwrap().top = 40.0;
//! let signals = view.scroll_tick(16);
//! assert!(signals.contains(ScrollSignals::SCROLLED));
//! assert_eq!(view.record().delta_y, 40.0);
//!
//! // Six quiet frames and the scroll is over.
//! let mut ended = ScrollSignals::empty();
//! for frame in 1..=6 {
//!     ended = view.frame(16 + frame * 16);
//! }
//! assert!(ended.contains(ScrollSignals::ENDED));
//! assert!(!view.is_scrolling());
//! ```
//!
//! This crate is `no_std`. The motion trail holds a bounded number of
//! recent samples inline and never touches the allocator.

#![no_std]

mod record;
mod trail;
mod view;

pub use record::{HorizontalMotion, ScrollRecord, VerticalMotion};
pub use view::{
    DECELERATION_FRICTION, FRAME_MS, MIN_VELOCITY_CONTINUE_DECELERATION,
    MIN_VELOCITY_START_DECELERATION, SCROLL_END_DEBOUNCE_FRAMES, ScrollSignals, ScrollTarget,
    ScrollView,
};
