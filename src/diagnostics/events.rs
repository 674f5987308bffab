// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types.

use crate::domain::notification::NotificationKey;
use std::fmt;
use std::time::Instant;

/// Why a notification left the active collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// The exit animation completed after a dismissal.
    ExitCompleted,
    /// Removed immediately through `remove` or `clear`.
    Removed,
}

/// What happened to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEventKind {
    /// Added to the active collection, entrance started.
    Shown,
    /// Dismissal requested during the entrance; applied later.
    DismissLatched,
    /// Entrance done, fully visible.
    Visible,
    /// Exit animation started.
    Dismissing,
    /// Left the active collection; `on_dismissed` was invoked.
    Removed(RemovalCause),
    /// A timer fired for a notification that was gone or had moved on.
    StaleTimer,
}

/// A single recorded lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub key: NotificationKey,
    pub kind: LifecycleEventKind,
    /// When the transition was applied (monotonic).
    pub at: Instant,
}

impl LifecycleEvent {
    #[must_use]
    pub fn new(key: NotificationKey, kind: LifecycleEventKind, at: Instant) -> Self {
        Self { key, kind, at }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            LifecycleEventKind::Shown => "shown",
            LifecycleEventKind::DismissLatched => "dismiss latched",
            LifecycleEventKind::Visible => "visible",
            LifecycleEventKind::Dismissing => "dismissing",
            LifecycleEventKind::Removed(RemovalCause::ExitCompleted) => "removed (exit completed)",
            LifecycleEventKind::Removed(RemovalCause::Removed) => "removed",
            LifecycleEventKind::StaleTimer => "stale timer",
        };
        write!(f, "notification {}: {}", self.key, kind)
    }
}
