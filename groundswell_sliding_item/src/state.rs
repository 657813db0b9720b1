// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sliding row state and panel side configuration.

bitflags::bitflags! {
    /// Which sides of a row have revealable panels.
    ///
    /// Purely configuration; the interaction state lives in
    /// [`SlidingState`]. Dragging leftward reveals the `RIGHT` panel and
    /// vice versa.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SideFlags: u8 {
        /// A panel behind the row's left edge, revealed by rightward drags.
        const LEFT = 1 << 0;
        /// A panel behind the row's right edge, revealed by leftward drags.
        const RIGHT = 1 << 1;
        /// Panels on both sides.
        const BOTH = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// A revealable panel side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The panel behind the row's left edge.
    Left,
    /// The panel behind the row's right edge.
    Right,
}

/// Interaction state of a sliding row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlidingState {
    /// At rest and torn down. Rows return here after staying fully closed
    /// for the disable delay.
    #[default]
    Disabled,
    /// Awake (a drag began on a closed row) with nothing revealed yet.
    Enabled,
    /// A panel is showing.
    Revealed {
        /// Which panel.
        side: Side,
        /// Whether the drag carried past the panel width by the swipe
        /// margin, priming the full-swipe action for release.
        primed: bool,
    },
}

impl SlidingState {
    /// Whether a panel is showing (in either primed state).
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed { .. })
    }

    /// The revealed side, if any.
    #[must_use]
    pub const fn revealed_side(self) -> Option<Side> {
        match self {
            Self::Revealed { side, .. } => Some(side),
            _ => None,
        }
    }
}
