// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo application.

use super::message::Demo;
use crate::config::Position;
use crate::domain::notification::{HexColor, Icon, IconFamily, NotificationKey};
use crate::error::Result;
use crate::notifications::{NotificationArgs, NotificationManager};
use std::time::Duration;

/// Content id rendered by the demo's custom content view.
pub const CUSTOM_CONTENT_ID: &str = "demo-card";

/// Shows the notification behind a demo button.
pub fn show_demo(manager: &mut NotificationManager, demo: Demo) -> Result<NotificationKey> {
    match demo {
        Demo::RoundedText => manager.show_rounded_text("Hello from a rounded notification"),
        Demo::MaterialText => manager.show_material_style_text(
            NotificationArgs::text("Material style banner").background(HexColor::rgb(0x21, 0x21, 0x21)),
        ),
        Demo::Info => manager.show_info("Settings saved"),
        Demo::Warning => manager.show_warning("Battery is running low"),
        Demo::Error => manager.show_error("Could not reach the server"),
        Demo::IconText => manager.show_icon_text(
            NotificationArgs::text("You have a new message")
                .icon(Icon::new(IconFamily::Material, "bell").with_color(HexColor::rgb(0xFF, 0xCC, 0x00))),
        ),
        Demo::Custom => manager.show_custom(NotificationArgs::custom(CUSTOM_CONTENT_ID)),
        Demo::Sticky => manager.show_rounded_text(
            NotificationArgs::text("Tap me to close").auto_dismiss(Duration::ZERO),
        ),
        Demo::InvalidWidth => {
            manager.show_rounded_text(NotificationArgs::text("Never shown").width("wide"))
        }
    }
}

/// Dismisses the most recently shown notification, if any.
pub fn dismiss_newest(manager: &mut NotificationManager) {
    let newest = manager.handles().last().map(|handle| handle.key());
    if let Some(key) = newest {
        manager.dismiss(key);
    }
}

/// Removes the oldest notification without its exit animation.
pub fn remove_oldest(manager: &mut NotificationManager) {
    let oldest = manager.handles().next().map(|handle| handle.key());
    if let Some(key) = oldest {
        manager.remove(key);
    }
}

#[must_use]
pub fn toggled(position: Position) -> Position {
    match position {
        Position::Top => Position::Bottom,
        Position::Bottom => Position::Top,
    }
}
