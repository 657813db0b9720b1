// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List-level bookkeeping: at most one row open at a time.

use core::num::NonZeroU32;

/// Identifies a registered row within one [`SlidingRoster`].
///
/// Ids are meaningful only to the roster that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlidingItemId(NonZeroU32);

/// Tracks which row of a list is open so hosts can close it when another
/// row starts to slide.
///
/// The roster never touches the rows themselves. A host calls
/// [`will_open`](Self::will_open) as a row starts revealing and closes
/// whichever row the call returns.
#[derive(Debug)]
pub struct SlidingRoster {
    next_id: NonZeroU32,
    open: Option<SlidingItemId>,
}

impl SlidingRoster {
    /// An empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: NonZeroU32::MIN,
            open: None,
        }
    }

    /// Issues an id for a new row.
    pub fn register(&mut self) -> SlidingItemId {
        let id = SlidingItemId(self.next_id);
        self.next_id = self.next_id.checked_add(1).unwrap_or(NonZeroU32::MIN);
        id
    }

    /// Forgets a row, clearing the open slot if it held it.
    pub fn unregister(&mut self, id: SlidingItemId) {
        if self.open == Some(id) {
            self.open = None;
        }
    }

    /// Records that `id` is about to reveal a panel.
    ///
    /// Returns the previously open row, which the host should close. A row
    /// re-opening over itself returns `None`.
    pub fn will_open(&mut self, id: SlidingItemId) -> Option<SlidingItemId> {
        let previous = self.open.filter(|open| *open != id);
        self.open = Some(id);
        previous
    }

    /// Records that `id` has settled fully closed.
    pub fn did_close(&mut self, id: SlidingItemId) {
        if self.open == Some(id) {
            self.open = None;
        }
    }

    /// The row currently holding the open slot.
    #[must_use]
    pub const fn opened(&self) -> Option<SlidingItemId> {
        self.open
    }
}

impl Default for SlidingRoster {
    fn default() -> Self {
        Self::new()
    }
}
