// SPDX-License-Identifier: MPL-2.0
//! Overlay container that stacks the active notifications.
//!
//! Notifications are laid out in show order against one edge of the window:
//! with [`Position::Top`] the oldest sits at the top, with
//! [`Position::Bottom`] the oldest sits at the bottom and newer ones stack
//! above it.

use super::toast::Toast;
use crate::config::defaults::OVERLAY_EDGE_PADDING;
use crate::config::Position;
use crate::domain::notification::{resolve_width, NotificationKey, WidthSpec};
use crate::notifications::{Message, NotificationHandle, NotificationManager};
use crate::ui::design_tokens::spacing;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length, Padding};
use std::time::Instant;

/// Handles in the order they are drawn from top to bottom.
pub fn layout_order(
    manager: &NotificationManager,
    position: Position,
) -> Vec<&NotificationHandle> {
    let mut handles: Vec<_> = manager.handles().collect();
    if position == Position::Bottom {
        handles.reverse();
    }
    handles
}

/// Keys in top-to-bottom drawing order.
pub fn layout_keys(manager: &NotificationManager, position: Position) -> Vec<NotificationKey> {
    layout_order(manager, position)
        .into_iter()
        .map(NotificationHandle::key)
        .collect()
}

/// Width a notification is drawn at inside a viewport.
///
/// Widths are validated on `show`, so `None` means the handle holds a width
/// that no longer resolves. It is logged and the toast is left out.
#[must_use]
pub fn toast_width(handle: &NotificationHandle, viewport_width: f32) -> Option<f32> {
    drawn_width(handle.key(), handle.width(), viewport_width)
}

fn drawn_width(
    key: NotificationKey,
    width: Option<&WidthSpec>,
    viewport_width: f32,
) -> Option<f32> {
    match resolve_width(width, viewport_width) {
        Ok(width) => Some(width),
        Err(err) => {
            tracing::warn!(%key, %err, "unresolvable width, toast not drawn");
            None
        }
    }
}

/// Renders the overlay with every active notification.
pub fn view<'a>(
    manager: &'a NotificationManager,
    position: Position,
    viewport_width: f32,
    now: Instant,
    custom: &dyn Fn(&'a str) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = layout_order(manager, position)
        .into_iter()
        .filter_map(|handle| {
            let width = toast_width(handle, viewport_width)?;
            Some(Toast::view(handle, width, now, custom))
        })
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    let vertical = match position {
        Position::Top => alignment::Vertical::Top,
        Position::Bottom => alignment::Vertical::Bottom,
    };

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(vertical)
        .padding(Padding {
            top: OVERLAY_EDGE_PADDING,
            bottom: OVERLAY_EDGE_PADDING,
            left: 0.0,
            right: 0.0,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Content;
    use crate::notifications::ShowOptions;
    use crate::ui::toast::custom_placeholder;

    fn manager_with(count: usize) -> (NotificationManager, Vec<NotificationKey>) {
        let mut manager = NotificationManager::new();
        let keys = (0..count)
            .map(|i| {
                manager
                    .show(Content::Text(format!("#{i}")), ShowOptions::new())
                    .expect("valid options")
            })
            .collect();
        (manager, keys)
    }

    #[test]
    fn top_position_draws_oldest_first() {
        let (manager, keys) = manager_with(3);
        assert_eq!(layout_keys(&manager, Position::Top), keys);
    }

    #[test]
    fn bottom_position_draws_oldest_last() {
        let (manager, mut keys) = manager_with(3);
        keys.reverse();
        assert_eq!(layout_keys(&manager, Position::Bottom), keys);
    }

    #[test]
    fn removal_keeps_relative_order() {
        let (mut manager, keys) = manager_with(3);
        manager.remove(keys[1]);
        assert_eq!(layout_keys(&manager, Position::Top), vec![keys[0], keys[2]]);
    }

    #[test]
    fn default_width_is_ninety_percent() {
        let (manager, keys) = manager_with(1);
        let handle = manager.get(keys[0]).expect("active");
        assert_eq!(toast_width(handle, 400.0), Some(360.0));
    }

    #[test]
    fn declared_width_is_resolved_against_viewport() {
        let mut manager = NotificationManager::new();
        let key = manager
            .show(
                Content::Text("Hi".into()),
                ShowOptions::new().width(WidthSpec::full()),
            )
            .expect("valid options");
        let handle = manager.get(key).expect("active");
        assert_eq!(toast_width(handle, 640.0), Some(640.0));
    }

    #[test]
    fn unresolvable_width_is_not_drawn() {
        let key = NotificationKey::next();
        let malformed = WidthSpec::from(" 50% ");
        assert_eq!(drawn_width(key, Some(&malformed), 400.0), None);
        assert_eq!(drawn_width(key, Some(&WidthSpec::Absolute(f32::NAN)), 400.0), None);
        assert_eq!(drawn_width(key, Some(&WidthSpec::from("50%")), 400.0), Some(200.0));
    }

    #[test]
    fn view_builds_for_both_positions() {
        let (manager, _) = manager_with(2);
        let now = Instant::now();
        let _ = view(&manager, Position::Top, 800.0, now, &custom_placeholder);
        let _ = view(&manager, Position::Bottom, 800.0, now, &custom_placeholder);
    }
}
