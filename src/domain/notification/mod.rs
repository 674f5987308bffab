// SPDX-License-Identifier: MPL-2.0
//! Notification value types.
//!
//! - [`NotificationKey`]: collision-free identifier
//! - [`WidthSpec`] and [`resolve_width`]: declared width and its resolution
//! - [`AnimationSpec`]: entrance/exit effect plus duration
//! - [`Content`], [`Style`], [`Icon`]: what the renderer draws
//! - [`Phase`]: the per-notification lifecycle state machine

mod animation;
mod content;
mod key;
mod lifecycle;
mod width;

pub use animation::{AnimationEffect, AnimationSpec, DEFAULT_ANIMATION_DURATION};
pub use content::{Content, Corners, HexColor, Icon, IconFamily, Style, DEFAULT_ICON_SIZE};
pub use key::NotificationKey;
pub use lifecycle::{DismissOutcome, EntranceOutcome, Phase};
pub use width::{resolve_width, WidthSpec, DEFAULT_WIDTH_PERCENT};
