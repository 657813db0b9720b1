// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host's panel measurement seam.

/// Measured panel widths in logical px. Non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelWidths {
    /// Width of the left-side panel, 0.0 when absent.
    pub left: f64,
    /// Width of the right-side panel, 0.0 when absent.
    pub right: f64,
}

/// Host probe for panel measurement.
///
/// Reading layout can force the host to flush pending work, so the engine
/// asks exactly once per wake-up: on the first move tick after a fully
/// closed row starts sliding. Partially open rows keep their measurements.
pub trait PanelLayout {
    /// The current panel widths.
    fn panel_widths(&self) -> PanelWidths;
}

/// Fixed panel widths, for static layouts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPanels {
    widths: PanelWidths,
}

impl FixedPanels {
    /// Panels of the given widths.
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self {
            widths: PanelWidths { left, right },
        }
    }
}

impl PanelLayout for FixedPanels {
    fn panel_widths(&self) -> PanelWidths {
        self.widths
    }
}
