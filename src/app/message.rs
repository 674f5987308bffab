// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Position;
use crate::notifications;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Notification kinds the demo can show, one per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    RoundedText,
    MaterialText,
    Info,
    Warning,
    Error,
    IconText,
    Custom,
    /// Rounded text with auto-dismiss disabled; stays until tapped.
    Sticky,
    /// A width that cannot be resolved, to exercise error reporting.
    InvalidWidth,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::RoundedText,
        Demo::MaterialText,
        Demo::Info,
        Demo::Warning,
        Demo::Error,
        Demo::IconText,
        Demo::Custom,
        Demo::Sticky,
        Demo::InvalidWidth,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Demo::RoundedText => "Rounded text",
            Demo::MaterialText => "Material text",
            Demo::Info => "Info",
            Demo::Warning => "Warning",
            Demo::Error => "Error",
            Demo::IconText => "Icon and text",
            Demo::Custom => "Custom content",
            Demo::Sticky => "Sticky (tap to close)",
            Demo::InvalidWidth => "Invalid width",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Messages coming back from the notification overlay.
    Notification(notifications::Message),
    Show(Demo),
    DismissNewest,
    RemoveOldest,
    ClearAll,
    TogglePosition,
    WindowResized(Size),
    Tick(Instant), // Periodic tick for notification timers and animations
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured overlay position.
    pub position: Option<Position>,
    /// Loads settings from this file instead of the user config directory.
    pub config_path: Option<PathBuf>,
}
