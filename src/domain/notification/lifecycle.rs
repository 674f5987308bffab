// SPDX-License-Identifier: MPL-2.0
//! Per-notification lifecycle state machine.
//!
//! ```text
//! Entering ──entrance done──▶ Visible ──timer / dismiss──▶ Dismissing ──exit done──▶ Removed
//!     │                                                        ▲
//!     └──dismiss (latched, applied when the entrance ends)─────┘
//! ```
//!
//! This module only decides which transition applies. Arming timers and
//! removing the handle are the manager's job.

use std::fmt;

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entrance animation running. A dismissal requested meanwhile is latched.
    Entering { dismiss_latched: bool },
    /// Fully shown; the auto-dismiss timer (if any) is running.
    Visible,
    /// Exit animation running.
    Dismissing,
    /// Gone from the active collection.
    Removed,
}

/// Effect of asking a notification to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// The request was stored and will apply once the entrance completes.
    Latched,
    /// The exit animation starts now.
    ExitStarted,
    /// Already leaving (or gone, or already latched); nothing changes.
    Ignored,
}

/// Effect of the entrance animation finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceOutcome {
    /// Now visible; the caller arms the auto-dismiss timer if one is set.
    BecameVisible,
    /// A latched dismissal applies; the exit animation starts now.
    ExitStarted,
    /// Not entering any more; stale completion.
    Ignored,
}

impl Phase {
    /// Initial phase of every new notification.
    #[must_use]
    pub fn entering() -> Self {
        Phase::Entering {
            dismiss_latched: false,
        }
    }

    /// Applies a dismissal request (tap, timer or explicit call).
    pub fn request_dismiss(&mut self) -> DismissOutcome {
        match *self {
            Phase::Entering {
                dismiss_latched: false,
            } => {
                *self = Phase::Entering {
                    dismiss_latched: true,
                };
                DismissOutcome::Latched
            }
            Phase::Visible => {
                *self = Phase::Dismissing;
                DismissOutcome::ExitStarted
            }
            Phase::Entering {
                dismiss_latched: true,
            }
            | Phase::Dismissing
            | Phase::Removed => DismissOutcome::Ignored,
        }
    }

    /// Applies the end of the entrance animation.
    pub fn complete_entrance(&mut self) -> EntranceOutcome {
        match *self {
            Phase::Entering {
                dismiss_latched: false,
            } => {
                *self = Phase::Visible;
                EntranceOutcome::BecameVisible
            }
            Phase::Entering {
                dismiss_latched: true,
            } => {
                *self = Phase::Dismissing;
                EntranceOutcome::ExitStarted
            }
            _ => EntranceOutcome::Ignored,
        }
    }

    /// Applies the end of the exit animation. Returns true if the
    /// notification is now removed.
    pub fn complete_exit(&mut self) -> bool {
        if *self == Phase::Dismissing {
            *self = Phase::Removed;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_entering(self) -> bool {
        matches!(self, Phase::Entering { .. })
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Entering { .. } => "entering",
            Phase::Visible => "visible",
            Phase::Dismissing => "dismissing",
            Phase::Removed => "removed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_walks_every_phase() {
        let mut phase = Phase::entering();
        assert_eq!(phase.complete_entrance(), EntranceOutcome::BecameVisible);
        assert_eq!(phase, Phase::Visible);
        assert_eq!(phase.request_dismiss(), DismissOutcome::ExitStarted);
        assert_eq!(phase, Phase::Dismissing);
        assert!(phase.complete_exit());
        assert_eq!(phase, Phase::Removed);
    }

    #[test]
    fn dismiss_while_entering_is_latched_once() {
        let mut phase = Phase::entering();
        assert_eq!(phase.request_dismiss(), DismissOutcome::Latched);
        assert_eq!(phase.request_dismiss(), DismissOutcome::Ignored);
        assert_eq!(phase.complete_entrance(), EntranceOutcome::ExitStarted);
        assert_eq!(phase, Phase::Dismissing);
    }

    #[test]
    fn dismiss_is_ignored_once_leaving() {
        let mut phase = Phase::Dismissing;
        assert_eq!(phase.request_dismiss(), DismissOutcome::Ignored);
        assert_eq!(phase, Phase::Dismissing);

        let mut phase = Phase::Removed;
        assert_eq!(phase.request_dismiss(), DismissOutcome::Ignored);
    }

    #[test]
    fn stale_completions_are_ignored() {
        let mut phase = Phase::Visible;
        assert_eq!(phase.complete_entrance(), EntranceOutcome::Ignored);
        assert!(!phase.complete_exit());
        assert_eq!(phase, Phase::Visible);
    }
}
