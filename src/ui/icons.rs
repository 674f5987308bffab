// SPDX-License-Identifier: MPL-2.0
//! Icon rendering for notification content.
//!
//! Icons are referenced by family and name. The overlay renders them as
//! Unicode glyphs from the default font, so the common names across every
//! family resolve to the same symbol. Unknown names get a neutral bullet.

use crate::domain::notification::{Icon, IconFamily};
use iced::widget::{text, Text};
use iced::{Color, Theme};

/// Glyph shown for names without a mapping.
pub const FALLBACK_GLYPH: char = '\u{25CF}';

/// Resolves an icon to the glyph drawn for it.
#[must_use]
pub fn glyph(icon: &Icon) -> char {
    match (icon.family, icon.name.as_str()) {
        (_, "info" | "info-with-circle" | "info-outline" | "infocirlceo") => '\u{2139}',
        (_, "warning" | "alert" | "alert-triangle" | "exclamation-triangle") => '\u{26A0}',
        (_, "error" | "close" | "cross" | "x" | "times") => '\u{2715}',
        (_, "check" | "checkmark" | "done" | "check-circle") => '\u{2713}',
        (_, "star" | "star-outlined") => '\u{2605}',
        (_, "heart") => '\u{2665}',
        (_, "bell" | "notifications") => '\u{266A}',
        (IconFamily::Entypo, "dot-single") => '\u{00B7}',
        _ => FALLBACK_GLYPH,
    }
}

/// Builds the text widget for an icon, tinted with `alpha`.
pub fn view<'a>(icon: &Icon, alpha: f32) -> Text<'a> {
    let color = Color::from_rgba8(icon.color.r, icon.color.g, icon.color.b, alpha);
    Text::new(glyph(icon).to_string())
        .size(icon.size)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}
