// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan session state machine and its consumer-facing seam.

use alloc::string::String;
use core::fmt;

use crate::{GestureArbiter, GestureId, MotionSample, PanAxis, PanRecognizer};

/// Receives the pan lifecycle from a [`PanGesture`].
///
/// One implementation per consumer (a sliding row, a swipe-to-go-back
/// edge, a reorder handle). The controller guarantees the call order
/// within a session: `can_start`, then either `on_start` followed by any
/// number of `on_move` and exactly one `on_end`, or a single
/// `not_captured`.
pub trait PanHandler {
    /// Consulted on pointer-down, before the session opens. Vetoing leaves
    /// the pointer untouched for other consumers. Defaults to consent.
    fn can_start(&mut self, sample: &MotionSample) -> bool {
        let _ = sample;
        true
    }

    /// The gesture captured the pointer. `sample` is the crossing sample
    /// (or the down sample for thresholdless gestures).
    fn on_start(&mut self, sample: &MotionSample);

    /// A move while captured. Under [`MoveDispatch::Batched`] only the
    /// newest coalesced sample arrives, once per flush.
    fn on_move(&mut self, sample: &MotionSample);

    /// The pointer lifted while captured. The arbiter grant is already
    /// released when this runs.
    fn on_end(&mut self, sample: &MotionSample);

    /// The session closed without ever capturing: the pointer lifted below
    /// the threshold, the crossing was too steep, or arbitration went to a
    /// sibling. Defaults to doing nothing.
    fn not_captured(&mut self, sample: &MotionSample) {
        let _ = sample;
    }
}

/// How captured moves reach the handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveDispatch {
    /// Every move dispatches inside [`PanGesture::pointer_move`].
    #[default]
    Immediate,
    /// Moves coalesce into an at-most-one pending slot that
    /// [`PanGesture::flush_moves`] drains. For handlers that write layout
    /// the host batches once per frame.
    Batched,
}

/// Configuration for a [`PanGesture`].
#[derive(Clone, Debug)]
pub struct PanOptions {
    name: String,
    priority: i32,
    axis: PanAxis,
    threshold: f64,
    max_angle_deg: f64,
    dispatch: MoveDispatch,
    scroll_block: bool,
}

impl PanOptions {
    /// Options named `name` with the stock tuning: horizontal axis, 20px
    /// threshold, 40 degree cone, priority 0, immediate dispatch, no
    /// scroll blocking.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            priority: 0,
            axis: PanAxis::X,
            threshold: 20.0,
            max_angle_deg: 40.0,
            dispatch: MoveDispatch::Immediate,
            scroll_block: false,
        }
    }

    /// Sets the arbitration priority. Higher wins.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the pan axis.
    #[must_use]
    pub fn with_axis(mut self, axis: PanAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the distance threshold in logical px. A threshold of zero (or
    /// less) skips recognition entirely: the gesture attempts capture on
    /// pointer-down.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the widest deviation from the axis, in degrees, that still
    /// counts as a pan.
    #[must_use]
    pub fn with_max_angle_deg(mut self, degrees: f64) -> Self {
        self.max_angle_deg = degrees;
        self
    }

    /// Sets the move dispatch mode.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: MoveDispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Suppresses scrolling in the arbiter's scope for as long as this
    /// gesture holds capture. Horizontal drags inside vertical scrollers
    /// (sliding rows, swipe-back edges) set this.
    #[must_use]
    pub fn with_scroll_block(mut self, scroll_block: bool) -> Self {
        self.scroll_block = scroll_block;
        self
    }
}

/// Pan session state machine.
///
/// Wires a pointer stream to a [`PanHandler`] through recognition and
/// arbitration: pointer-down records candidacy with the
/// [`GestureArbiter`], the embedded [`PanRecognizer`] watches moves until
/// a direction commits, the commitment triggers the capture attempt, and
/// from capture on the handler receives the drag. Losing the capture
/// attempt aborts the whole session; the handler hears
/// [`not_captured`](PanHandler::not_captured) instead.
///
/// The arbiter is deliberately not owned: the host passes it into every
/// pointer operation, the same `&mut` lending every sibling gesture of the
/// scope uses.
///
/// ```rust
/// use groundswell_gesture::{
///     GestureArbiter, MotionSample, PanGesture, PanHandler, PanOptions,
/// };
///
/// struct Swipe {
///     grabbed_at: f64,
///     dragged: f64,
/// }
///
/// impl PanHandler for Swipe {
///     fn on_start(&mut self, sample: &MotionSample) {
///         self.grabbed_at = sample.x();
///     }
///     fn on_move(&mut self, sample: &MotionSample) {
///         self.dragged = sample.x() - self.grabbed_at;
///     }
///     fn on_end(&mut self, _sample: &MotionSample) {}
/// }
///
/// let mut arbiter = GestureArbiter::new();
/// let mut gesture = PanGesture::new(
///     &mut arbiter,
///     PanOptions::new("demo-swipe"),
///     Swipe { grabbed_at: 0.0, dragged: 0.0 },
/// );
///
/// assert!(gesture.pointer_down(&mut arbiter, MotionSample::new(100.0, 50.0, 0)));
/// // Crosses the 20px threshold at a shallow angle: captures here.
/// gesture.pointer_move(&mut arbiter, MotionSample::new(130.0, 52.0, 16));
/// gesture.pointer_move(&mut arbiter, MotionSample::new(150.0, 52.0, 32));
/// gesture.pointer_up(&mut arbiter, MotionSample::new(150.0, 52.0, 48));
///
/// assert_eq!(gesture.handler().dragged, 20.0);
/// assert!(!arbiter.is_captured());
/// ```
pub struct PanGesture<H: PanHandler> {
    handler: H,
    id: GestureId,
    recognizer: Option<PanRecognizer>,
    dispatch: MoveDispatch,
    scroll_block: bool,
    started: bool,
    captured: bool,
    pending_move: Option<MotionSample>,
}

impl<H: PanHandler> fmt::Debug for PanGesture<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanGesture")
            .field("id", &self.id)
            .field("recognizer", &self.recognizer)
            .field("dispatch", &self.dispatch)
            .field("scroll_block", &self.scroll_block)
            .field("started", &self.started)
            .field("captured", &self.captured)
            .field("pending_move", &self.pending_move)
            .finish_non_exhaustive()
    }
}

impl<H: PanHandler> PanGesture<H> {
    /// Registers with the arbiter and wires `handler`.
    pub fn new(arbiter: &mut GestureArbiter, options: PanOptions, handler: H) -> Self {
        let id = arbiter.register(&options.name, options.priority);
        let recognizer = (options.threshold > 0.0)
            .then(|| PanRecognizer::new(options.axis, options.threshold, options.max_angle_deg));
        Self {
            handler,
            id,
            recognizer,
            dispatch: options.dispatch,
            scroll_block: options.scroll_block,
            started: false,
            captured: false,
            pending_move: None,
        }
    }

    /// The id this gesture registered under.
    #[must_use]
    pub const fn id(&self) -> GestureId {
        self.id
    }

    /// Whether a session is live (pointer down; capture decided or not).
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Whether this gesture currently owns the pointer.
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// Borrows the handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutably borrows the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Opens a session for a pointer that just went down.
    ///
    /// Returns `false` and stays idle when the handler or the arbiter
    /// vetoes, or when a thresholdless gesture loses its immediate capture
    /// attempt. Ignored (also `false`) while a session is already live.
    pub fn pointer_down(&mut self, arbiter: &mut GestureArbiter, sample: MotionSample) -> bool {
        if self.started {
            return false;
        }
        if !self.handler.can_start(&sample) {
            return false;
        }
        // Candidacy is per interaction; drop anything stale from the last one.
        self.release(arbiter);
        if !arbiter.request_start(self.id) {
            return false;
        }
        self.started = true;
        self.captured = false;
        self.pending_move = None;
        match &mut self.recognizer {
            Some(recognizer) => recognizer.start(sample.point),
            None => {
                // No threshold: capture is decided by the down sample.
                if !self.try_capture(arbiter, &sample) {
                    self.started = false;
                    self.release(arbiter);
                    return false;
                }
            }
        }
        true
    }

    /// Feeds a move.
    ///
    /// Until capture, samples drive the recognizer; the committed direction
    /// triggers the one capture attempt, and losing it closes the session
    /// through [`PanHandler::not_captured`]. After capture, samples reach
    /// the handler per the configured [`MoveDispatch`].
    pub fn pointer_move(&mut self, arbiter: &mut GestureArbiter, sample: MotionSample) {
        if !self.started {
            return;
        }
        if self.captured {
            match self.dispatch {
                MoveDispatch::Immediate => self.handler.on_move(&sample),
                MoveDispatch::Batched => self.pending_move = Some(sample),
            }
            return;
        }
        let committed = match &mut self.recognizer {
            Some(recognizer) => recognizer.detect(sample.point) && recognizer.pan().is_committed(),
            None => false,
        };
        if committed && !self.try_capture(arbiter, &sample) {
            self.abort(arbiter, &sample);
        }
    }

    /// Closes the session for a lifted (or cancelled) pointer.
    ///
    /// A captured session releases its grant and ends through
    /// [`PanHandler::on_end`]; anything else ends through
    /// [`PanHandler::not_captured`]. A pending batched move is dropped:
    /// the end sample supersedes it.
    pub fn pointer_up(&mut self, arbiter: &mut GestureArbiter, sample: MotionSample) {
        if !self.started {
            return;
        }
        if self.captured {
            self.release(arbiter);
            self.handler.on_end(&sample);
        } else {
            self.handler.not_captured(&sample);
        }
        self.started = false;
        self.captured = false;
        self.pending_move = None;
    }

    /// Dispatches the coalesced move, if any. Hosts running
    /// [`MoveDispatch::Batched`] call this from their write phase.
    pub fn flush_moves(&mut self) {
        if let Some(sample) = self.pending_move.take()
            && self.captured
        {
            self.handler.on_move(&sample);
        }
    }

    /// Releases any grant, unregisters from the arbiter, and returns the
    /// handler.
    pub fn destroy(self, arbiter: &mut GestureArbiter) -> H {
        self.release(arbiter);
        arbiter.unregister(self.id);
        self.handler
    }

    fn try_capture(&mut self, arbiter: &mut GestureArbiter, sample: &MotionSample) -> bool {
        if !arbiter.request_capture(self.id) {
            return false;
        }
        self.captured = true;
        if self.scroll_block {
            arbiter.block_scroll(self.id);
        }
        self.handler.on_start(sample);
        true
    }

    fn abort(&mut self, arbiter: &mut GestureArbiter, sample: &MotionSample) {
        self.started = false;
        self.captured = false;
        self.pending_move = None;
        self.release(arbiter);
        self.handler.not_captured(sample);
    }

    /// Drops the arbiter grant and, when configured, the scroll block.
    fn release(&self, arbiter: &mut GestureArbiter) {
        arbiter.release(self.id);
        if self.scroll_block {
            arbiter.unblock_scroll(self.id);
        }
    }
}
