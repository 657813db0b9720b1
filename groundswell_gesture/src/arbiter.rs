// Copyright 2026 the Groundswell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-based capture arbitration between gesture consumers.

use alloc::string::String;
use core::num::NonZeroU32;

use hashbrown::{HashMap, HashSet};

/// Identifies a consumer registered with one [`GestureArbiter`].
///
/// Ids are scoped to the arbiter that issued them; two arbiters issue
/// overlapping ids and their consumers never interact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GestureId(NonZeroU32);

#[derive(Clone, Debug)]
struct Registration {
    name: String,
    priority: i32,
}

/// Decides which gesture consumer owns a pointer interaction.
///
/// One arbiter serves one scope of competing consumers, typically a
/// pointer surface. The protocol has two steps: every interested consumer
/// records *candidacy* with [`request_start`](Self::request_start) when the
/// interaction begins, and the first consumer whose recognizer commits asks
/// for *capture* with [`request_capture`](Self::request_capture). Capture is
/// granted iff the asker's priority is the maximum among current candidates,
/// so a higher-priority sibling that is still undecided wins over an eager
/// low-priority one. At most one consumer holds capture at a time, and a
/// grant lasts until [`release`](Self::release).
///
/// Two block lists refine the protocol: named gestures can be suppressed
/// wholesale (a transition suppressing `"swipe-back"`), and any holder can
/// suppress scrolling for the duration of its capture. Both are sets of
/// blocker ids, so overlapping blockers compose and each is removed by the
/// id that added it.
#[derive(Clone, Debug)]
pub struct GestureArbiter {
    next_id: NonZeroU32,
    registrations: HashMap<GestureId, Registration>,
    candidates: HashMap<GestureId, i32>,
    captured: Option<GestureId>,
    blocked_names: HashMap<String, HashSet<GestureId>>,
    scroll_blockers: HashSet<GestureId>,
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureArbiter {
    /// An arbiter with no registered consumers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: NonZeroU32::MIN,
            registrations: HashMap::new(),
            candidates: HashMap::new(),
            captured: None,
            blocked_names: HashMap::new(),
            scroll_blockers: HashSet::new(),
        }
    }

    /// Registers a consumer under `name` with the given priority.
    ///
    /// Higher priorities win arbitration. Names are not unique; several
    /// consumers may share one (every row of a list registering
    /// `"item-swipe"`), and name-blocking suppresses all of them.
    pub fn register(&mut self, name: &str, priority: i32) -> GestureId {
        let id = self.reserve_id();
        self.registrations.insert(
            id,
            Registration {
                name: String::from(name),
                priority,
            },
        );
        id
    }

    /// Issues an id without registering a gesture.
    ///
    /// Blockers that are not themselves gestures (modal layers, route
    /// transitions) use these ids with [`block_gesture`](Self::block_gesture)
    /// and [`block_scroll`](Self::block_scroll).
    pub fn reserve_id(&mut self) -> GestureId {
        let id = GestureId(self.next_id);
        self.next_id = self.next_id.checked_add(1).unwrap_or(NonZeroU32::MIN);
        id
    }

    /// Releases and forgets a consumer.
    pub fn unregister(&mut self, id: GestureId) {
        self.release(id);
        self.registrations.remove(&id);
    }

    /// Whether `id` may begin a session right now.
    ///
    /// `false` while any consumer holds capture, while the consumer's name
    /// is blocked, or for ids this arbiter never registered.
    #[must_use]
    pub fn can_start(&self, id: GestureId) -> bool {
        let Some(registration) = self.registrations.get(&id) else {
            return false;
        };
        if self.captured.is_some() {
            return false;
        }
        !self.is_gesture_blocked(&registration.name)
    }

    /// Records candidacy for the current interaction.
    ///
    /// Returns `false` (and records nothing) when the consumer cannot start.
    pub fn request_start(&mut self, id: GestureId) -> bool {
        if !self.can_start(id) {
            return false;
        }
        let Some(registration) = self.registrations.get(&id) else {
            return false;
        };
        self.candidates.insert(id, registration.priority);
        true
    }

    /// Attempts to capture the interaction for `id`.
    ///
    /// Implies [`request_start`](Self::request_start). The grant succeeds
    /// iff `id`'s priority equals the maximum among current candidates; on
    /// success every candidacy is cleared. On failure only `id`'s candidacy
    /// is dropped, leaving the stronger candidates in play.
    pub fn request_capture(&mut self, id: GestureId) -> bool {
        if !self.request_start(id) {
            return false;
        }
        let Some(priority) = self.candidates.get(&id).copied() else {
            return false;
        };
        let max = self.candidates.values().copied().max().unwrap_or(priority);
        if priority == max {
            self.captured = Some(id);
            self.candidates.clear();
            true
        } else {
            self.candidates.remove(&id);
            false
        }
    }

    /// Drops `id`'s candidacy, and its capture if it holds one.
    pub fn release(&mut self, id: GestureId) {
        self.candidates.remove(&id);
        if self.captured == Some(id) {
            self.captured = None;
        }
    }

    /// The current capture holder, if any.
    #[must_use]
    pub const fn captured(&self) -> Option<GestureId> {
        self.captured
    }

    /// Whether any consumer holds capture.
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    /// Suppresses every consumer registered under `name`, on behalf of
    /// `blocker`. Idempotent per blocker id.
    pub fn block_gesture(&mut self, name: &str, blocker: GestureId) {
        self.blocked_names
            .entry(String::from(name))
            .or_default()
            .insert(blocker);
    }

    /// Removes `blocker`'s suppression of `name`. The name stays blocked
    /// while other blockers remain.
    pub fn unblock_gesture(&mut self, name: &str, blocker: GestureId) {
        if let Some(blockers) = self.blocked_names.get_mut(name) {
            blockers.remove(&blocker);
            if blockers.is_empty() {
                self.blocked_names.remove(name);
            }
        }
    }

    /// Whether any blocker currently suppresses `name`.
    #[must_use]
    pub fn is_gesture_blocked(&self, name: &str) -> bool {
        self.blocked_names
            .get(name)
            .is_some_and(|blockers| !blockers.is_empty())
    }

    /// Suppresses scrolling on behalf of `blocker`, typically for the
    /// duration of a capture.
    pub fn block_scroll(&mut self, blocker: GestureId) {
        self.scroll_blockers.insert(blocker);
    }

    /// Removes `blocker`'s scroll suppression.
    pub fn unblock_scroll(&mut self, blocker: GestureId) {
        self.scroll_blockers.remove(&blocker);
    }

    /// Whether any blocker currently suppresses scrolling. Scroll engines
    /// consult this before reacting to touch input.
    #[must_use]
    pub fn is_scroll_blocked(&self) -> bool {
        !self.scroll_blockers.is_empty()
    }
}
