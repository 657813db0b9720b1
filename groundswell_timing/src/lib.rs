// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundswell_timing --heading-base-level=0

//! Groundswell Timing: host-driven timing primitives.
//!
//! The gesture and scroll engines in this workspace never spawn timers or
//! threads. Anything that would be a timeout, a debounce, or an animation
//! clock in a platform runtime is instead a small value that the host
//! advances explicitly, either with a millisecond timestamp or with a frame
//! tick. That keeps every time-dependent behavior deterministic under test.
//!
//! The primitives are:
//!
//! - [`Deadline`]: at most one pending timed action. Re-arming replaces the
//!   previous instant, and [`Deadline::fire`] reports `true` exactly once.
//! - [`FrameCountdown`]: a frame-denominated debounce. Re-arming resets it;
//!   [`FrameCountdown::tick`] reports `true` on the tick it reaches zero.
//! - [`FrameBudget`]: a cap on animation frame attempts, so a driven
//!   animation always terminates even if its stop condition never holds.
//! - [`ease_out_cubic`]: the deceleration curve used for programmatic
//!   scrolling.
//!
//! ## Minimal example
//!
//! ```rust
//! use groundswell_timing::Deadline;
//!
//! let mut close_delay = Deadline::idle();
//! close_delay.arm(1_600); // now is 1_000, delay is 600ms
//!
//! assert!(!close_delay.fire(1_599)); // not due yet
//! assert!(close_delay.fire(1_612)); // due; the host may poll late
//! assert!(!close_delay.fire(1_700)); // already fired
//! ```
//!
//! `fire` reports `true` on the first call at or after the armed instant,
//! whenever that call happens to arrive, so hosts with coarse clocks can
//! poll as rarely as they like without missing a deadline.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod deadline;
mod ease;
mod frames;

pub use deadline::Deadline;
pub use ease::ease_out_cubic;
pub use frames::{FrameBudget, FrameCountdown};
