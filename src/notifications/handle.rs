// SPDX-License-Identifier: MPL-2.0
//! The manager's record for one active notification.

use super::options::{DismissCallback, ShowOptions};
use crate::domain::notification::{
    AnimationSpec, Content, NotificationKey, Phase, Style, WidthSpec,
};
use std::fmt;
use std::time::{Duration, Instant};

/// One active notification.
///
/// Renderers only ever see `&NotificationHandle`; every mutation goes through
/// the [`NotificationManager`](super::NotificationManager).
pub struct NotificationHandle {
    key: NotificationKey,
    content: Content,
    entrance: AnimationSpec,
    exit: AnimationSpec,
    width: Option<WidthSpec>,
    auto_dismiss: Duration,
    style: Style,
    phase: Phase,
    /// When the current phase started (logical time, see the scheduler).
    phase_started_at: Instant,
    created_at: Instant,
    on_dismissed: Option<DismissCallback>,
}

impl NotificationHandle {
    pub(super) fn new(
        key: NotificationKey,
        content: Content,
        options: ShowOptions,
        now: Instant,
    ) -> Self {
        Self {
            key,
            content,
            entrance: options.entrance,
            exit: options.exit,
            width: options.width,
            auto_dismiss: options.auto_dismiss,
            style: options.style,
            phase: Phase::entering(),
            phase_started_at: now,
            created_at: now,
            on_dismissed: options.on_dismissed,
        }
    }

    #[must_use]
    pub fn key(&self) -> NotificationKey {
        self.key
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Declared width; `None` means the default width.
    #[must_use]
    pub fn width(&self) -> Option<&WidthSpec> {
        self.width.as_ref()
    }

    #[must_use]
    pub fn entrance(&self) -> AnimationSpec {
        self.entrance
    }

    #[must_use]
    pub fn exit(&self) -> AnimationSpec {
        self.exit
    }

    /// Delay before the automatic dismissal; zero means manual only.
    #[must_use]
    pub fn auto_dismiss_delay(&self) -> Duration {
        self.auto_dismiss
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// How far the running animation is, from 0.0 to 1.0.
    ///
    /// Visible notifications report 1.0. Renderers use this to interpolate
    /// opacity or offset; the easing is up to them.
    #[must_use]
    pub fn phase_progress(&self, now: Instant) -> f32 {
        let animation = match self.phase {
            Phase::Entering { .. } => self.entrance,
            Phase::Dismissing => self.exit,
            Phase::Visible | Phase::Removed => return 1.0,
        };
        if animation.is_instant() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.phase_started_at);
        (elapsed.as_secs_f32() / animation.duration().as_secs_f32()).min(1.0)
    }

    pub(super) fn phase_mut(&mut self) -> &mut Phase {
        &mut self.phase
    }

    pub(super) fn mark_phase_start(&mut self, at: Instant) {
        self.phase_started_at = at;
    }

    /// Runs the dismissal callback. Subsequent calls do nothing.
    pub(super) fn notify_dismissed(&mut self) {
        self.phase = Phase::Removed;
        if let Some(callback) = self.on_dismissed.take() {
            callback(self.key);
        }
    }
}

impl fmt::Debug for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHandle")
            .field("key", &self.key)
            .field("content", &self.content)
            .field("phase", &self.phase)
            .field("auto_dismiss", &self.auto_dismiss)
            .finish_non_exhaustive()
    }
}
