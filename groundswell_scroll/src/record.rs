// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutated-in-place scroll snapshot.

/// Which way the content is moving vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalMotion {
    /// The scroll offset is shrinking toward the top.
    Up,
    /// The scroll offset is growing toward the bottom.
    #[default]
    Down,
}

/// Which way the content is moving horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalMotion {
    /// The scroll offset is shrinking toward the left edge.
    Left,
    /// The scroll offset is growing toward the right edge.
    Right,
}

/// Snapshot of the current scroll motion.
///
/// One record per [`ScrollView`](crate::ScrollView), mutated in place on
/// every tick. It describes the present, not a history: consumers read it
/// synchronously when an operation reports a signal, and must not hold
/// values across ticks expecting them to stay meaningful.
///
/// Vertical velocity is in px per frame, measured over roughly the last
/// 100ms of motion. In kinetic mode it is the per-frame increment the
/// deceleration loop applies to the offset; positive velocity grows the
/// offset. In native mode it is sampled from the offset history with the
/// opposite sign: positive means the content is moving up. The direction
/// fields carry the content-space reading in both modes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRecord {
    /// Timestamp of the tick that last mutated this record.
    pub time_ms: u64,
    /// Current vertical scroll offset.
    pub scroll_top: f64,
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
    /// Vertical offset at the start of the current scroll.
    pub start_y: f64,
    /// Horizontal offset at the start of the current scroll.
    pub start_x: f64,
    /// Vertical offset moved since the scroll started.
    pub delta_y: f64,
    /// Horizontal offset moved since the scroll started.
    pub delta_x: f64,
    /// Vertical velocity in px per frame. Zeroed when the scroll ends.
    pub velocity_y: f64,
    /// Horizontal velocity in px per frame. Zeroed when the scroll ends.
    pub velocity_x: f64,
    /// Vertical direction of the most recent motion.
    pub direction_y: VerticalMotion,
    /// Horizontal direction of the most recent motion, once any horizontal
    /// motion has been observed.
    pub direction_x: Option<HorizontalMotion>,
    /// Whether a scroll is in progress.
    pub is_scrolling: bool,
}

impl Default for ScrollRecord {
    fn default() -> Self {
        Self {
            time_ms: 0,
            scroll_top: 0.0,
            scroll_left: 0.0,
            start_y: 0.0,
            start_x: 0.0,
            delta_y: 0.0,
            delta_x: 0.0,
            velocity_y: 0.0,
            velocity_x: 0.0,
            direction_y: VerticalMotion::Down,
            direction_x: None,
            is_scrolling: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_state_defaults() {
        let record = ScrollRecord::default();
        assert!(!record.is_scrolling);
        assert_eq!(record.velocity_y, 0.0);
        assert_eq!(record.direction_y, VerticalMotion::Down);
        assert_eq!(record.direction_x, None);
    }
}
