// SPDX-License-Identifier: MPL-2.0
//! Notification content and style passthrough.
//!
//! Everything in here is opaque to the manager. It is stored with the handle
//! and handed back to the renderer untouched.

use crate::error::{Error, Result};
use std::fmt;

/// Default icon size in logical pixels.
pub const DEFAULT_ICON_SIZE: f32 = 36.0;

/// An sRGB color parsed from a `#RGB` or `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::rgb(0, 0, 0);
    pub const WHITE: HexColor = HexColor::rgb(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB` (case-insensitive, leading `#` required).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for anything else.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(raw.to_string());
        let hex = raw.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Icon font families a notification icon can be taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconFamily {
    Zocial,
    Octicon,
    #[default]
    Material,
    MaterialCommunity,
    Ionicon,
    Foundation,
    EvilIcon,
    Entypo,
    FontAwesome,
    FontAwesome5,
    SimpleLineIcon,
    Feather,
    AntDesign,
}

impl IconFamily {
    /// Maps a family name to a family; unknown names fall back to Material.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "zocial" => IconFamily::Zocial,
            "octicon" => IconFamily::Octicon,
            "material" => IconFamily::Material,
            "material-community" => IconFamily::MaterialCommunity,
            "ionicon" => IconFamily::Ionicon,
            "foundation" => IconFamily::Foundation,
            "evilicon" => IconFamily::EvilIcon,
            "entypo" => IconFamily::Entypo,
            "font-awesome" => IconFamily::FontAwesome,
            "font-awesome-5" => IconFamily::FontAwesome5,
            "simple-line-icon" => IconFamily::SimpleLineIcon,
            "feather" => IconFamily::Feather,
            "antdesign" => IconFamily::AntDesign,
            _ => IconFamily::Material,
        }
    }
}

/// An icon reference: family plus glyph name, resolved by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub family: IconFamily,
    pub name: String,
    pub size: f32,
    pub color: HexColor,
}

impl Icon {
    #[must_use]
    pub fn new(family: IconFamily, name: impl Into<String>) -> Self {
        Self {
            family,
            name: name.into(),
            size: DEFAULT_ICON_SIZE,
            color: HexColor::WHITE,
        }
    }

    /// The `info` glyph from the Entypo family, used by the severity presets.
    #[must_use]
    pub fn info() -> Self {
        Self::new(IconFamily::Entypo, "info")
    }

    #[must_use]
    pub fn with_color(mut self, color: HexColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// What a notification displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// An icon to the left of a text.
    IconText { icon: Icon, text: String },
    /// Caller-defined content the renderer knows how to draw, referenced by
    /// an identifier.
    Custom(String),
}

impl Content {
    /// Returns the text shown by the notification, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) | Content::IconText { text, .. } => Some(text),
            Content::Custom(_) => None,
        }
    }
}

/// Container corner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corners {
    #[default]
    Rounded,
    Square,
}

/// Style passthrough stored with each notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: HexColor,
    pub text_color: HexColor,
    pub text_size: f32,
    pub corners: Corners,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: HexColor::BLACK,
            text_color: HexColor::WHITE,
            text_size: 18.0,
            corners: Corners::Rounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(HexColor::parse("#38908F").unwrap(), HexColor::rgb(0x38, 0x90, 0x8F));
        assert_eq!(HexColor::parse("#c70039").unwrap(), HexColor::rgb(0xC7, 0x00, 0x39));
        assert_eq!(HexColor::parse("#fff").unwrap(), HexColor::WHITE);
        assert_eq!(HexColor::parse("#000").unwrap(), HexColor::BLACK);
    }

    #[test]
    fn rejects_malformed_hex() {
        for raw in ["38908F", "#12345", "#ggg", "#", "pink", "#ffcc00ff"] {
            assert!(
                matches!(HexColor::parse(raw), Err(Error::InvalidColor(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_is_uppercase_long_form() {
        assert_eq!(HexColor::parse("#ffcc00").unwrap().to_string(), "#FFCC00");
    }

    #[test]
    fn unknown_icon_family_falls_back_to_material() {
        assert_eq!(IconFamily::from_name("entypo"), IconFamily::Entypo);
        assert_eq!(IconFamily::from_name("webdings"), IconFamily::Material);
    }

    #[test]
    fn custom_content_has_no_text() {
        assert_eq!(Content::Text("Hi".into()).text(), Some("Hi"));
        assert_eq!(Content::Custom("banner".into()).text(), None);
    }
}
