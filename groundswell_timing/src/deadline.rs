// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single pending timed action, advanced by host timestamps.

/// At most one pending timed action.
///
/// A `Deadline` replaces the ad-hoc "remember the timer handle and clear it
/// before starting a new one" pattern: arming always replaces the previous
/// instant, so there is never more than one pending action, and a stale
/// instant can never fire after a re-arm or a [`cancel`](Self::cancel).
///
/// The host supplies time as milliseconds on whatever monotonic clock it
/// already has. [`fire`](Self::fire) latches: it returns `true` on the first
/// call at or after the armed instant and `false` ever after, until the next
/// [`arm`](Self::arm).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deadline {
    due_ms: Option<u64>,
}

impl Deadline {
    /// An unarmed deadline.
    #[must_use]
    pub const fn idle() -> Self {
        Self { due_ms: None }
    }

    /// Arms (or re-arms) the deadline for the given instant.
    ///
    /// Any previously armed instant is discarded.
    pub fn arm(&mut self, due_ms: u64) {
        self.due_ms = Some(due_ms);
    }

    /// Discards the pending instant, if any.
    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    /// Whether an instant is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    /// The pending instant, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<u64> {
        self.due_ms
    }

    /// Fires the deadline if `now_ms` has reached the armed instant.
    ///
    /// Returns `true` exactly once per arming, then disarms itself.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
