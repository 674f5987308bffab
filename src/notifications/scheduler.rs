// SPDX-License-Identifier: MPL-2.0
//! Deadline-based timers for notification lifecycles.
//!
//! Timers are plain deadlines checked whenever the host delivers a tick, so
//! nothing here blocks or spawns. Each notification has at most one timer of
//! each [`TimerKind`]. Cancelling removes the timer outright; the manager
//! still re-checks liveness when a timer fires.

use crate::domain::notification::NotificationKey;
use std::time::Instant;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// The entrance animation has run its course.
    EntranceComplete,
    /// The auto-dismiss delay has elapsed.
    AutoDismiss,
    /// The exit animation has run its course.
    ExitComplete,
}

/// An armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub key: NotificationKey,
    pub kind: TimerKind,
    pub deadline: Instant,
    /// Arm order, breaks ties between equal deadlines.
    seq: u64,
}

/// Pending timers for all active notifications.
#[derive(Debug, Default)]
pub struct DismissalScheduler {
    timers: Vec<Timer>,
    next_seq: u64,
}

impl DismissalScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer, replacing any timer of the same kind for that key.
    pub fn arm(&mut self, key: NotificationKey, kind: TimerKind, deadline: Instant) {
        self.cancel(key, kind);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            key,
            kind,
            deadline,
            seq,
        });
    }

    /// Cancels one timer. Returns true if it was armed.
    pub fn cancel(&mut self, key: NotificationKey, kind: TimerKind) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| !(t.key == key && t.kind == kind));
        self.timers.len() != before
    }

    /// Cancels every timer of a notification.
    pub fn cancel_all(&mut self, key: NotificationKey) {
        self.timers.retain(|t| t.key != key);
    }

    /// Removes and returns the earliest timer due at `now`, if any.
    ///
    /// Timers are returned one at a time because firing one may arm another
    /// that is already due.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(index, _)| index)?;
        Some(self.timers.swap_remove(index))
    }

    /// Returns the deadline of a specific timer, if armed.
    #[must_use]
    pub fn deadline(&self, key: NotificationKey, kind: TimerKind) -> Option<Instant> {
        self.timers
            .iter()
            .find(|t| t.key == key && t.kind == kind)
            .map(|t| t.deadline)
    }

    /// Earliest pending deadline, so a host can sleep until then.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
