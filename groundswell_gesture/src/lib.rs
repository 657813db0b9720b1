// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundswell_gesture --heading-base-level=0

//! Groundswell Gesture: pan recognition, capture arbitration, and session
//! dispatch.
//!
//! This crate turns a raw pointer stream into owned pan gestures. It is
//! renderer-agnostic and host-driven: the host feeds [`MotionSample`]
//! values in, and typed callbacks come out. Nothing here listens to a
//! platform, schedules a timer, or touches a widget tree.
//!
//! The pieces are:
//!
//! - [`MotionSample`]: one pointer position plus its host timestamp.
//! - [`PanRecognizer`]: one-shot threshold-and-angle classification with an
//!   axis lock. Pure geometry; usable on its own.
//! - [`GestureArbiter`]: decides which of several competing consumers owns
//!   a pointer interaction, by priority, with at most one capture at a
//!   time. Also carries the name- and scroll-block lists.
//! - [`PanGesture`]: the session state machine wiring the two together and
//!   dispatching the drag lifecycle to a [`PanHandler`].
//! - [`VelocityWindow`]: rolling px/ms velocity over the last ~100ms, for
//!   release decisions (swipe settle, fling start) when the event source
//!   does not supply a velocity.
//!
//! ## Arbitration in one picture
//!
//! Every gesture interested in a pointer-down records *candidacy*. The
//! first gesture whose recognizer commits a direction asks to *capture*;
//! the arbiter grants it only if no higher-priority candidate is still in
//! play. One grant exists at a time, and it lasts until release. A sliding
//! row (priority 20) therefore beats the scroll view (priority 0) to a
//! horizontal drag even when the scroll view's recognizer commits first.
//!
//! ## Minimal example
//!
//! ```rust
//! use groundswell_gesture::{GestureArbiter, PanAxis, PanRecognizer};
//!
//! // Recognition alone, no arbitration:
//! let mut pan = PanRecognizer::new(PanAxis::X, 20.0, 40.0);
//! pan.start(kurbo::Point::new(0.0, 0.0));
//! assert!(pan.detect(kurbo::Point::new(24.0, 3.0)));
//! assert!(pan.pan().is_committed());
//!
//! // Arbitration alone, no recognition:
//! let mut arbiter = GestureArbiter::new();
//! let edge = arbiter.register("swipe-back", 30);
//! assert!(arbiter.request_capture(edge));
//! ```
//!
//! See [`PanGesture`] for the full session flow.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod arbiter;
mod controller;
mod recognizer;
mod sample;

pub use arbiter::{GestureArbiter, GestureId};
pub use controller::{MoveDispatch, PanGesture, PanHandler, PanOptions};
pub use recognizer::{PanAxis, PanDirection, PanRecognizer};
pub use sample::{MotionSample, VelocityWindow};
