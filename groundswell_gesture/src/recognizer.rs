// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threshold-and-angle pan classification.

use kurbo::{Point, Vec2};

/// Axis a pan gesture is constrained to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanAxis {
    /// Horizontal pans. Motion that crosses the threshold at too steep an
    /// angle from the x-axis never commits.
    #[default]
    X,
    /// Vertical pans.
    Y,
    /// Unconstrained: any motion that crosses the threshold commits as
    /// [`PanDirection::Positive`].
    Any,
}

/// Direction committed by a [`PanRecognizer`] on the crossing sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanDirection {
    /// Nothing committed: the threshold is uncrossed, or it was crossed at
    /// too steep an angle to count as a pan on the configured axis.
    #[default]
    None,
    /// Along the axis' positive side (rightward for [`PanAxis::X`],
    /// downward for [`PanAxis::Y`]).
    Positive,
    /// Along the axis' negative side.
    Negative,
}

impl PanDirection {
    /// `true` for `Positive` or `Negative`.
    #[must_use]
    pub const fn is_committed(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The direction as a sign: `1.0`, `-1.0`, or `0.0`.
    #[must_use]
    pub const fn signum(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// One-shot threshold-and-angle classifier for pan gestures.
///
/// Pure geometry, no ownership of the pointer: feed it the session's start
/// point and every subsequent sample. [`detect`](Self::detect) reports
/// `true` exactly once per session, on the sample whose displacement first
/// reaches the distance threshold, and the direction commits at that
/// instant. There is no backward transition: later samples never un-commit
/// or re-classify, and a crossing that was too steep parks the session at
/// [`PanDirection::None`] for good.
///
/// Displacements are compared squared, so per-sample cost is a handful of
/// multiplications.
///
/// ```rust
/// use groundswell_gesture::{PanAxis, PanDirection, PanRecognizer};
/// use kurbo::Point;
///
/// let mut pan = PanRecognizer::new(PanAxis::X, 20.0, 40.0);
/// pan.start(Point::new(100.0, 100.0));
///
/// assert!(!pan.detect(Point::new(110.0, 100.0))); // under the threshold
/// assert!(pan.detect(Point::new(125.0, 103.0))); // crossed, shallow angle
/// assert_eq!(pan.pan(), PanDirection::Positive);
///
/// // One-shot: the commitment is final for this session.
/// assert!(!pan.detect(Point::new(0.0, 0.0)));
/// assert_eq!(pan.pan(), PanDirection::Positive);
/// ```
#[derive(Clone, Debug)]
pub struct PanRecognizer {
    axis: PanAxis,
    threshold_sq: f64,
    max_cosine: f64,
    start: Point,
    direction: PanDirection,
    armed: bool,
}

impl PanRecognizer {
    /// A recognizer for pans along `axis`.
    ///
    /// `threshold` is the displacement in logical px that must accumulate
    /// before classification. `max_angle_deg` is the widest deviation from
    /// the axis (in degrees, at most 90) that still counts as a pan.
    #[must_use]
    pub fn new(axis: PanAxis, threshold: f64, max_angle_deg: f64) -> Self {
        Self {
            axis,
            threshold_sq: threshold * threshold,
            max_cosine: libm::cos(max_angle_deg.to_radians()),
            start: Point::ZERO,
            direction: PanDirection::None,
            armed: false,
        }
    }

    /// Begins a session at `start`, discarding any previous commitment.
    pub fn start(&mut self, start: Point) {
        self.start = start;
        self.direction = PanDirection::None;
        self.armed = true;
    }

    /// Feeds one sample.
    ///
    /// Returns `true` exactly once per session, on the crossing sample;
    /// [`pan`](Self::pan) carries the committed direction from then on.
    pub fn detect(&mut self, point: Point) -> bool {
        if !self.armed {
            return false;
        }
        let delta = point - self.start;
        let distance_sq = delta.x * delta.x + delta.y * delta.y;
        if distance_sq < self.threshold_sq || distance_sq == 0.0 {
            return false;
        }
        self.direction = self.classify(delta, distance_sq);
        self.armed = false;
        true
    }

    /// The committed direction. [`PanDirection::None`] until the crossing
    /// sample, and forever if the crossing was too steep.
    #[must_use]
    pub const fn pan(&self) -> PanDirection {
        self.direction
    }

    fn classify(&self, delta: Vec2, distance_sq: f64) -> PanDirection {
        let along = match self.axis {
            PanAxis::X => delta.x,
            PanAxis::Y => delta.y,
            PanAxis::Any => return PanDirection::Positive,
        };
        // cos(angle to the axis) is along/|delta|; comparing squares keeps
        // this sqrt-free, with the sign restored afterwards.
        let cosine_sq = (along * along) / distance_sq;
        if cosine_sq <= self.max_cosine * self.max_cosine {
            return PanDirection::None;
        }
        if along > 0.0 {
            PanDirection::Positive
        } else {
            PanDirection::Negative
        }
    }
}
