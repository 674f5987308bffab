// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Forwards window resizes so the overlay can resolve relative widths.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Creates the periodic tick driving notification timers.
///
/// Only runs while notifications are on screen.
pub fn create_tick_subscription(interval: Duration, has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
