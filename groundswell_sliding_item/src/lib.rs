// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundswell_sliding_item --heading-base-level=0

//! Groundswell Sliding Item: the swipe-to-reveal row engine.
//!
//! A sliding row is the list pattern where dragging a row sideways reveals
//! an action panel tucked under one or both ends, with a rubber-band feel
//! past the panel's width and a velocity-aware settle on release. This
//! crate owns that physics and state, none of the rendering: hosts feed
//! positions in, read the open amount out, and draw it however they like.
//!
//! The pieces are:
//!
//! - [`SlidingItem`]: one row's engine. Tracks the signed open amount
//!   through [`start_sliding`](SlidingItem::start_sliding),
//!   [`move_sliding`](SlidingItem::move_sliding), and
//!   [`end_sliding`](SlidingItem::end_sliding), applying the
//!   direction clamps, the elastic overdrag, and the settle policy.
//! - [`PanelLayout`]: how the engine learns panel widths. Measurement is
//!   deferred to the first move of a fresh drag and cached until the row
//!   fully closes, so hosts pay for layout reads once per reveal.
//! - [`SlidingRoster`]: list-level bookkeeping so at most one row of a
//!   list is open at a time.
//! - [`SlidingItemHandler`] (feature `gesture_adapter`): a ready-made
//!   `groundswell_gesture` pan handler that drives a [`SlidingItem`] and
//!   measures release velocity from the drag's own samples.
//!
//! ## Minimal example
//!
//! ```rust
//! use groundswell_sliding_item::{FixedPanels, Side, SideFlags, SlidingItem};
//!
//! // A row with a 100px action panel under its right end.
//! let mut row = SlidingItem::new(FixedPanels::new(0.0, 100.0), SideFlags::RIGHT);
//!
//! // Dragging leftward from x=300 reveals the panel. The first move of a
//! // fresh drag measures the panels and reports no offset.
//! row.start_sliding(300.0);
//! assert_eq!(row.move_sliding(300.0, 0), None);
//! assert_eq!(row.move_sliding(230.0, 16), Some(70.0));
//!
//! // Past the panel width the row resists elastically.
//! assert_eq!(row.move_sliding(150.0, 32), Some(127.5));
//!
//! // A slow release settles by position: past halfway stays open.
//! let outcome = row.end_sliding(0.0, 48);
//! assert_eq!(outcome.resting_point, 100.0);
//! assert_eq!(outcome.swiped, None);
//!
//! // A second drag resumes from the open position, no re-measure.
//! // Carrying past the swipe margin primes the full-swipe action,
//! // which the release then reports.
//! row.start_sliding(300.0);
//! assert_eq!(row.move_sliding(240.0, 100), Some(133.0));
//! let outcome = row.end_sliding(0.0, 116);
//! assert_eq!(outcome.swiped, Some(Side::Right));
//! ```
//!
//! Open amounts are signed: positive reveals the right panel, negative the
//! left. Time enters only as `now_ms` arguments on the host's own clock,
//! which is what drives the auto-disable delay after a row closes.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

#[cfg(feature = "gesture_adapter")]
mod adapter;
mod item;
mod layout;
mod roster;
mod state;

#[cfg(feature = "gesture_adapter")]
pub use adapter::SlidingItemHandler;
pub use item::{
    DISABLE_DELAY_MS, ELASTIC_FACTOR, FAST_SWIPE_VELOCITY, SWIPE_MARGIN, SlideOutcome,
    SlidingItem, swipe_should_reset,
};
pub use layout::{FixedPanels, PanelLayout, PanelWidths};
pub use roster::{SlidingItemId, SlidingRoster};
pub use state::{Side, SideFlags, SlidingState};
