// SPDX-License-Identifier: MPL-2.0
//! Ready-made notification shapes.
//!
//! Each preset turns a small [`NotificationArgs`] into the content and
//! [`ShowOptions`] of a full `show` call. Presets hold no state.
//!
//! | Preset | Auto-dismiss | Entrance | Exit | Look |
//! |---|---|---|---|---|
//! | rounded text | 3000ms | none | none | rounded, black |
//! | material text | 3000ms | none | none | full width, square, black |
//! | info / warning / error | 3000ms | bounceInDown | bounceOutUp | full width, square, severity color, info icon |
//! | icon text | 3000ms | fadeIn 1000ms | fadeOut 1000ms | full width, caller icon |
//! | custom | 3000ms | fadeIn 1000ms | fadeOut 1000ms | full width, caller content |

use super::options::{DismissCallback, ShowOptions};
use crate::config::defaults::{DEFAULT_ANIMATION_DURATION_MS, DEFAULT_AUTO_DISMISS_MS};
use crate::domain::notification::{
    AnimationEffect, AnimationSpec, Content, Corners, HexColor, Icon, NotificationKey, Style,
    WidthSpec,
};
use std::fmt;
use std::time::Duration;

/// Text size used by the severity presets.
const SEVERITY_TEXT_SIZE: f32 = 20.0;

/// Defaults shared by every preset. Overridable through the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetDefaults {
    pub auto_dismiss: Duration,
    pub animation_duration: Duration,
}

impl Default for PresetDefaults {
    fn default() -> Self {
        Self {
            auto_dismiss: Duration::from_millis(DEFAULT_AUTO_DISMISS_MS),
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
        }
    }
}

/// Severity level of the info/warning/error presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Background color of the severity banner.
    #[must_use]
    pub fn background(self) -> HexColor {
        match self {
            Severity::Info => HexColor::rgb(0x38, 0x90, 0x8F),
            Severity::Warning => HexColor::rgb(0xFF, 0xCC, 0x00),
            Severity::Error => HexColor::rgb(0xC7, 0x00, 0x39),
        }
    }
}

/// The simplified argument set of the presets.
///
/// Only `text` is required; every other field overrides a preset default.
/// Fields a preset has no use for (an icon on a plain text preset) are
/// ignored.
#[derive(Default)]
pub struct NotificationArgs {
    pub text: Option<String>,
    pub background: Option<HexColor>,
    pub color: Option<HexColor>,
    pub auto_dismiss: Option<Duration>,
    pub entrance: Option<AnimationSpec>,
    pub exit: Option<AnimationSpec>,
    pub width: Option<WidthSpec>,
    pub icon: Option<Icon>,
    /// Identifier of caller-drawn content, used by the custom preset when no
    /// text is given.
    pub custom: Option<String>,
    pub on_dismissed: Option<DismissCallback>,
}

impl NotificationArgs {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Arguments for caller-drawn content without text.
    #[must_use]
    pub fn custom(id: impl Into<String>) -> Self {
        Self {
            custom: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn background(mut self, color: HexColor) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, delay: Duration) -> Self {
        self.auto_dismiss = Some(delay);
        self
    }

    #[must_use]
    pub fn entrance(mut self, animation: AnimationSpec) -> Self {
        self.entrance = Some(animation);
        self
    }

    #[must_use]
    pub fn exit(mut self, animation: AnimationSpec) -> Self {
        self.exit = Some(animation);
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<WidthSpec>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn on_dismissed(mut self, callback: impl FnOnce(NotificationKey) + 'static) -> Self {
        self.on_dismissed = Some(Box::new(callback));
        self
    }

    fn text_or_empty(&mut self) -> String {
        self.text.take().unwrap_or_default()
    }
}

impl From<&str> for NotificationArgs {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for NotificationArgs {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl fmt::Debug for NotificationArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationArgs")
            .field("text", &self.text)
            .field("background", &self.background)
            .field("color", &self.color)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("entrance", &self.entrance)
            .field("exit", &self.exit)
            .field("width", &self.width)
            .field("icon", &self.icon)
            .field("custom", &self.custom)
            .field("on_dismissed", &self.on_dismissed.is_some())
            .finish()
    }
}

/// Content and options ready for `show`.
pub type Prepared = (Content, ShowOptions);

/// Assembles options from the overridable parts of the arguments.
fn options(
    args: &mut NotificationArgs,
    defaults: &PresetDefaults,
    entrance: AnimationSpec,
    exit: AnimationSpec,
    width: Option<WidthSpec>,
    style: Style,
) -> ShowOptions {
    let mut options = ShowOptions::new()
        .entrance(args.entrance.unwrap_or(entrance))
        .exit(args.exit.unwrap_or(exit))
        .auto_dismiss(args.auto_dismiss.unwrap_or(defaults.auto_dismiss))
        .style(style);
    if let Some(width) = args.width.take().or(width) {
        options = options.width(width);
    }
    options.on_dismissed = args.on_dismissed.take();
    options
}

/// Rounded black text bubble at the default width, no animation.
#[must_use]
pub fn rounded_text(mut args: NotificationArgs, defaults: &PresetDefaults) -> Prepared {
    let style = Style {
        background: args.background.unwrap_or(HexColor::BLACK),
        text_color: args.color.unwrap_or(HexColor::WHITE),
        corners: Corners::Rounded,
        ..Style::default()
    };
    let content = Content::Text(args.text_or_empty());
    let options = options(
        &mut args,
        defaults,
        AnimationSpec::none(),
        AnimationSpec::none(),
        None,
        style,
    );
    (content, options)
}

/// Full-width, square-cornered text banner, no animation.
#[must_use]
pub fn material_text(mut args: NotificationArgs, defaults: &PresetDefaults) -> Prepared {
    let style = Style {
        background: args.background.unwrap_or(HexColor::BLACK),
        text_color: args.color.unwrap_or(HexColor::WHITE),
        corners: Corners::Square,
        ..Style::default()
    };
    let content = Content::Text(args.text_or_empty());
    let options = options(
        &mut args,
        defaults,
        AnimationSpec::none(),
        AnimationSpec::none(),
        Some(WidthSpec::full()),
        style,
    );
    (content, options)
}

/// Full-width severity banner with an info icon that bounces in and out.
#[must_use]
pub fn severity(
    severity: Severity,
    mut args: NotificationArgs,
    defaults: &PresetDefaults,
) -> Prepared {
    let color = args.color.unwrap_or(HexColor::WHITE);
    let style = Style {
        background: args.background.unwrap_or(severity.background()),
        text_color: color,
        text_size: SEVERITY_TEXT_SIZE,
        corners: Corners::Square,
    };
    let content = Content::IconText {
        icon: Icon::info().with_color(color),
        text: args.text_or_empty(),
    };
    let options = options(
        &mut args,
        defaults,
        AnimationSpec::new(AnimationEffect::BounceInDown, defaults.animation_duration),
        AnimationSpec::new(AnimationEffect::BounceOutUp, defaults.animation_duration),
        Some(WidthSpec::full()),
        style,
    );
    (content, options)
}

/// Full-width icon and text that fades in and out.
#[must_use]
pub fn icon_text(mut args: NotificationArgs, defaults: &PresetDefaults) -> Prepared {
    let color = args.color.unwrap_or(HexColor::WHITE);
    let style = Style {
        background: args.background.unwrap_or(HexColor::BLACK),
        text_color: color,
        ..Style::default()
    };
    let icon = args
        .icon
        .take()
        .unwrap_or_else(|| Icon::info().with_color(color));
    let content = Content::IconText {
        icon,
        text: args.text_or_empty(),
    };
    let options = fading_options(&mut args, defaults, style);
    (content, options)
}

/// Caller content that fades in and out. Text wins over custom content.
#[must_use]
pub fn custom(mut args: NotificationArgs, defaults: &PresetDefaults) -> Prepared {
    let style = Style {
        background: args.background.unwrap_or(HexColor::BLACK),
        text_color: args.color.unwrap_or(HexColor::WHITE),
        ..Style::default()
    };
    let content = match (args.text.take(), args.custom.take()) {
        (Some(text), _) => Content::Text(text),
        (None, Some(id)) => Content::Custom(id),
        (None, None) => Content::Text(String::new()),
    };
    let options = fading_options(&mut args, defaults, style);
    (content, options)
}

fn fading_options(
    args: &mut NotificationArgs,
    defaults: &PresetDefaults,
    style: Style,
) -> ShowOptions {
    options(
        args,
        defaults,
        AnimationSpec::new(AnimationEffect::FadeIn, defaults.animation_duration),
        AnimationSpec::new(AnimationEffect::FadeOut, defaults.animation_duration),
        Some(WidthSpec::full()),
        style,
    )
}
