// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationManager` owns the active notifications in the order they
//! were shown, drives each one through its [`Phase`]s and removes it once its
//! exit completes. Time only moves forward when the host calls
//! [`NotificationManager::tick`], so the manager never blocks and tests can
//! feed it any instant they like.

use super::handle::NotificationHandle;
use super::options::ShowOptions;
use super::presets::{self, NotificationArgs, PresetDefaults, Prepared, Severity};
use super::scheduler::{DismissalScheduler, Timer, TimerKind};
use crate::config::Config;
use crate::diagnostics::{CircularBuffer, LifecycleEvent, LifecycleEventKind, RemovalCause};
use crate::domain::diagnostics::HistoryCapacity;
use crate::domain::notification::{
    Content, DismissOutcome, EntranceOutcome, NotificationKey, Phase,
};
use crate::error::{Error, Result};
use std::time::{Duration, Instant};

/// Messages a renderer sends back to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user tapped a notification.
    Tapped(NotificationKey),
    /// The renderer finished playing the current entrance or exit animation.
    AnimationFinished(NotificationKey),
    /// Periodic tick for firing due timers.
    Tick(Instant),
}

/// Owns the active notifications and their dismissal timers.
///
/// Not thread-safe by design: it lives on the UI thread and every call is
/// applied in the order the host event loop delivers it.
#[derive(Debug)]
pub struct NotificationManager {
    /// Active notifications, oldest first.
    handles: Vec<NotificationHandle>,
    scheduler: DismissalScheduler,
    history: CircularBuffer<LifecycleEvent>,
    defaults: PresetDefaults,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationManager {
    /// Creates an empty manager with the documented preset defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(PresetDefaults::default(), HistoryCapacity::default())
    }

    /// Creates an empty manager configured from the overlay config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(config.preset_defaults(), config.history_capacity())
    }

    #[must_use]
    pub fn with_defaults(defaults: PresetDefaults, history: HistoryCapacity) -> Self {
        Self {
            handles: Vec::new(),
            scheduler: DismissalScheduler::new(),
            history: CircularBuffer::new(history),
            defaults,
        }
    }

    // ======================================================================
    // Core operations
    // ======================================================================

    /// Shows a notification and returns its key right away.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWidthSpec`] if the declared width is malformed.
    /// - [`Error::DuplicateKey`] if the generated key is already active.
    pub fn show(&mut self, content: Content, options: ShowOptions) -> Result<NotificationKey> {
        self.show_at(content, options, Instant::now())
    }

    /// [`show`](Self::show) with an explicit current time.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_at(
        &mut self,
        content: Content,
        options: ShowOptions,
        now: Instant,
    ) -> Result<NotificationKey> {
        if let Some(width) = &options.width {
            width.validate()?;
        }

        let key = NotificationKey::next();
        if self.index_of(key).is_some() {
            tracing::warn!(%key, "key generator returned an active key");
            return Err(Error::DuplicateKey(key));
        }

        let entrance = options.entrance;
        self.handles
            .push(NotificationHandle::new(key, content, options, now));
        self.record(key, LifecycleEventKind::Shown, now);
        tracing::debug!(%key, entrance = %entrance.effect(), "notification shown");

        if entrance.is_instant() {
            let index = self.handles.len() - 1;
            self.finish_entrance(index, now);
        } else {
            self.arm_after(key, TimerKind::EntranceComplete, now, entrance.duration());
        }
        Ok(key)
    }

    /// Asks a notification to leave through its exit animation.
    ///
    /// Unknown keys and notifications already leaving are ignored, so calling
    /// this twice is the same as calling it once. A request made during the
    /// entrance is latched and applied when the entrance completes.
    pub fn dismiss(&mut self, key: NotificationKey) -> DismissOutcome {
        self.dismiss_at(key, Instant::now())
    }

    /// [`dismiss`](Self::dismiss) with an explicit current time.
    pub fn dismiss_at(&mut self, key: NotificationKey, now: Instant) -> DismissOutcome {
        let Some(index) = self.index_of(key) else {
            tracing::debug!(%key, "dismiss for inactive notification ignored");
            return DismissOutcome::Ignored;
        };

        let outcome = self.handles[index].phase_mut().request_dismiss();
        match outcome {
            DismissOutcome::Latched => {
                self.record(key, LifecycleEventKind::DismissLatched, now);
            }
            DismissOutcome::ExitStarted => self.begin_exit(index, now),
            DismissOutcome::Ignored => {}
        }
        outcome
    }

    /// Removes a notification immediately, skipping its exit animation.
    ///
    /// Returns `true` if the notification was active. Pending timers are
    /// cancelled and `on_dismissed` runs.
    pub fn remove(&mut self, key: NotificationKey) -> bool {
        let Some(index) = self.index_of(key) else {
            return false;
        };
        self.remove_at_index(index, RemovalCause::Removed, Instant::now());
        true
    }

    /// Removes every notification, oldest first.
    pub fn clear(&mut self) {
        let now = Instant::now();
        while !self.handles.is_empty() {
            self.remove_at_index(0, RemovalCause::Removed, now);
        }
        self.scheduler.clear();
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// A timer that fires late arms its follow-up relative to its own
    /// deadline, so one late tick catches up on the whole sequence.
    pub fn tick(&mut self, now: Instant) {
        while let Some(timer) = self.scheduler.pop_due(now) {
            self.fire(timer);
        }
    }

    /// The renderer finished the current animation of a notification.
    ///
    /// Advances the phase without waiting for the timer. Reports for
    /// notifications that are gone or not animating are ignored.
    pub fn animation_finished(&mut self, key: NotificationKey) {
        self.animation_finished_at(key, Instant::now());
    }

    /// [`animation_finished`](Self::animation_finished) with an explicit time.
    pub fn animation_finished_at(&mut self, key: NotificationKey, now: Instant) {
        let Some(index) = self.index_of(key) else {
            return;
        };
        match self.handles[index].phase() {
            Phase::Entering { .. } => {
                self.scheduler.cancel(key, TimerKind::EntranceComplete);
                self.finish_entrance(index, now);
            }
            Phase::Dismissing => {
                self.scheduler.cancel(key, TimerKind::ExitComplete);
                self.remove_at_index(index, RemovalCause::ExitCompleted, now);
            }
            Phase::Visible | Phase::Removed => {
                tracing::trace!(%key, "animation report with no running animation");
            }
        }
    }

    /// Handles a renderer message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Tapped(key) => {
                self.dismiss(key);
            }
            Message::AnimationFinished(key) => self.animation_finished(key),
            Message::Tick(now) => self.tick(now),
        }
    }

    // ======================================================================
    // Convenience constructors
    // ======================================================================

    /// Rounded text bubble. See [`presets`] for the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_rounded_text(&mut self, args: impl Into<NotificationArgs>) -> Result<NotificationKey> {
        let prepared = presets::rounded_text(args.into(), &self.defaults);
        self.show_prepared(prepared)
    }

    /// Full-width, square-cornered text banner.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_material_style_text(
        &mut self,
        args: impl Into<NotificationArgs>,
    ) -> Result<NotificationKey> {
        let prepared = presets::material_text(args.into(), &self.defaults);
        self.show_prepared(prepared)
    }

    /// Info banner.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_info(&mut self, args: impl Into<NotificationArgs>) -> Result<NotificationKey> {
        self.show_severity(Severity::Info, args.into())
    }

    /// Warning banner.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_warning(&mut self, args: impl Into<NotificationArgs>) -> Result<NotificationKey> {
        self.show_severity(Severity::Warning, args.into())
    }

    /// Error banner.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_error(&mut self, args: impl Into<NotificationArgs>) -> Result<NotificationKey> {
        self.show_severity(Severity::Error, args.into())
    }

    /// Icon and text, fading in and out.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_icon_text(&mut self, args: impl Into<NotificationArgs>) -> Result<NotificationKey> {
        let prepared = presets::icon_text(args.into(), &self.defaults);
        self.show_prepared(prepared)
    }

    /// Caller content, fading in and out.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_custom(&mut self, args: impl Into<NotificationArgs>) -> Result<NotificationKey> {
        let prepared = presets::custom(args.into(), &self.defaults);
        self.show_prepared(prepared)
    }

    fn show_severity(&mut self, level: Severity, args: NotificationArgs) -> Result<NotificationKey> {
        let prepared = presets::severity(level, args, &self.defaults);
        self.show_prepared(prepared)
    }

    fn show_prepared(&mut self, (content, options): Prepared) -> Result<NotificationKey> {
        self.show(content, options)
    }

    // ======================================================================
    // Accessors
    // ======================================================================

    /// Active notifications in the order they were shown.
    pub fn handles(&self) -> impl Iterator<Item = &NotificationHandle> {
        self.handles.iter()
    }

    #[must_use]
    pub fn get(&self, key: NotificationKey) -> Option<&NotificationHandle> {
        self.handles.iter().find(|h| h.key() == key)
    }

    /// Current phase of a notification; `None` once it has been removed.
    #[must_use]
    pub fn phase(&self, key: NotificationKey) -> Option<Phase> {
        self.get(key).map(NotificationHandle::phase)
    }

    #[must_use]
    pub fn contains(&self, key: NotificationKey) -> bool {
        self.index_of(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Recorded lifecycle transitions, oldest first.
    #[must_use]
    pub fn history(&self) -> &CircularBuffer<LifecycleEvent> {
        &self.history
    }

    #[must_use]
    pub fn preset_defaults(&self) -> PresetDefaults {
        self.defaults
    }

    // ======================================================================
    // Transitions
    // ======================================================================

    fn index_of(&self, key: NotificationKey) -> Option<usize> {
        self.handles.iter().position(|h| h.key() == key)
    }

    /// Applies a due timer after checking the notification is still there and
    /// still in the phase the timer was armed for.
    fn fire(&mut self, timer: Timer) {
        let Timer { key, kind, deadline, .. } = timer;
        let Some(index) = self.index_of(key) else {
            self.stale(key, kind, deadline);
            return;
        };

        tracing::trace!(%key, ?kind, "timer fired");
        match (kind, self.handles[index].phase()) {
            (TimerKind::EntranceComplete, Phase::Entering { .. }) => {
                self.finish_entrance(index, deadline);
            }
            (TimerKind::AutoDismiss, Phase::Visible) => {
                self.handles[index].phase_mut().request_dismiss();
                self.begin_exit(index, deadline);
            }
            (TimerKind::ExitComplete, Phase::Dismissing) => {
                self.remove_at_index(index, RemovalCause::ExitCompleted, deadline);
            }
            _ => self.stale(key, kind, deadline),
        }
    }

    /// Arms `kind` to fire `delay` after `from`. A deadline past the end of
    /// `Instant` is never reached, so no timer is armed for it.
    fn arm_after(
        &mut self,
        key: NotificationKey,
        kind: TimerKind,
        from: Instant,
        delay: Duration,
    ) {
        match from.checked_add(delay) {
            Some(deadline) => self.scheduler.arm(key, kind, deadline),
            None => {
                tracing::warn!(%key, ?kind, ?delay, "timer deadline overflows, not armed");
            }
        }
    }

    fn stale(&mut self, key: NotificationKey, kind: TimerKind, at: Instant) {
        tracing::warn!(%key, ?kind, "stale timer ignored");
        self.record(key, LifecycleEventKind::StaleTimer, at);
    }

    fn finish_entrance(&mut self, index: usize, at: Instant) {
        let handle = &mut self.handles[index];
        let key = handle.key();
        match handle.phase_mut().complete_entrance() {
            EntranceOutcome::BecameVisible => {
                handle.mark_phase_start(at);
                let delay = handle.auto_dismiss_delay();
                self.record(key, LifecycleEventKind::Visible, at);
                tracing::debug!(%key, "notification visible");
                // A zero delay means manual dismissal only.
                if !delay.is_zero() {
                    self.arm_after(key, TimerKind::AutoDismiss, at, delay);
                }
            }
            EntranceOutcome::ExitStarted => self.begin_exit(index, at),
            EntranceOutcome::Ignored => {}
        }
    }

    /// Starts the exit animation of a notification already in `Dismissing`.
    fn begin_exit(&mut self, index: usize, at: Instant) {
        let handle = &mut self.handles[index];
        let key = handle.key();
        let exit = handle.exit();
        handle.mark_phase_start(at);

        self.scheduler.cancel(key, TimerKind::AutoDismiss);
        self.record(key, LifecycleEventKind::Dismissing, at);
        tracing::debug!(%key, exit = %exit.effect(), "notification dismissing");

        if exit.is_instant() {
            self.remove_at_index(index, RemovalCause::ExitCompleted, at);
        } else {
            self.arm_after(key, TimerKind::ExitComplete, at, exit.duration());
        }
    }

    fn remove_at_index(&mut self, index: usize, cause: RemovalCause, at: Instant) {
        let mut handle = self.handles.remove(index);
        let key = handle.key();
        if cause == RemovalCause::ExitCompleted && !handle.phase_mut().complete_exit() {
            tracing::trace!(%key, phase = %handle.phase(), "exit completed outside dismissing");
        }
        self.scheduler.cancel_all(key);
        handle.notify_dismissed();
        self.record(key, LifecycleEventKind::Removed(cause), at);
        tracing::debug!(%key, ?cause, remaining = self.handles.len(), "notification removed");
    }

    fn record(&mut self, key: NotificationKey, kind: LifecycleEventKind, at: Instant) {
        self.history.push(LifecycleEvent::new(key, kind, at));
    }
}
