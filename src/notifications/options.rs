// SPDX-License-Identifier: MPL-2.0
//! Options accepted by [`NotificationManager::show`](super::NotificationManager::show).

use crate::domain::notification::{AnimationSpec, NotificationKey, Style, WidthSpec};
use std::fmt;
use std::time::Duration;

/// Callback invoked once when a notification leaves the active collection.
pub type DismissCallback = Box<dyn FnOnce(NotificationKey)>;

/// How a notification is shown and when it goes away.
///
/// The default is a static, manual-dismiss notification at the default
/// width: no animations and an auto-dismiss delay of zero.
#[derive(Default)]
pub struct ShowOptions {
    pub(super) entrance: AnimationSpec,
    pub(super) exit: AnimationSpec,
    pub(super) width: Option<WidthSpec>,
    pub(super) auto_dismiss: Duration,
    pub(super) style: Style,
    pub(super) on_dismissed: Option<DismissCallback>,
}

impl ShowOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entrance(mut self, animation: AnimationSpec) -> Self {
        self.entrance = animation;
        self
    }

    #[must_use]
    pub fn exit(mut self, animation: AnimationSpec) -> Self {
        self.exit = animation;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<WidthSpec>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the delay between becoming visible and the automatic dismissal.
    ///
    /// [`Duration::ZERO`] means the notification stays until dismissed.
    #[must_use]
    pub fn auto_dismiss(mut self, delay: Duration) -> Self {
        self.auto_dismiss = delay;
        self
    }

    /// Same as [`ShowOptions::auto_dismiss`] in milliseconds.
    #[must_use]
    pub fn auto_dismiss_ms(self, delay_ms: u64) -> Self {
        self.auto_dismiss(Duration::from_millis(delay_ms))
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Registers the callback run when the notification is removed.
    #[must_use]
    pub fn on_dismissed(mut self, callback: impl FnOnce(NotificationKey) + 'static) -> Self {
        self.on_dismissed = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ShowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowOptions")
            .field("entrance", &self.entrance)
            .field("exit", &self.exit)
            .field("width", &self.width)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("style", &self.style)
            .field("on_dismissed", &self.on_dismissed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::AnimationEffect;

    #[test]
    fn default_options_are_manual_and_static() {
        let options = ShowOptions::new();
        assert_eq!(options.auto_dismiss, Duration::ZERO);
        assert!(options.entrance.is_instant());
        assert!(options.exit.is_instant());
        assert!(options.width.is_none());
        assert!(options.on_dismissed.is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let options = ShowOptions::new()
            .entrance(AnimationSpec::with_default_duration(AnimationEffect::FadeIn))
            .exit(AnimationSpec::with_default_duration(AnimationEffect::FadeOut))
            .width("100%")
            .auto_dismiss_ms(2000)
            .on_dismissed(|_| {});

        assert_eq!(options.entrance.effect(), AnimationEffect::FadeIn);
        assert_eq!(options.exit.effect(), AnimationEffect::FadeOut);
        assert_eq!(options.width, Some(WidthSpec::full()));
        assert_eq!(options.auto_dismiss, Duration::from_millis(2000));
        assert!(format!("{options:?}").contains("on_dismissed: true"));
    }
}
