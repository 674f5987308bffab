// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A toast is a tappable card drawn from a [`NotificationHandle`]. Tapping it
//! sends [`Message::Tapped`]; the manager decides what that means for the
//! notification's lifecycle.

use crate::domain::notification::{AnimationEffect, Content, Corners, HexColor, Phase};
use crate::notifications::{Message, NotificationHandle};
use crate::ui::design_tokens::{radius, shadow, spacing};
use crate::ui::icons;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// How a toast is drawn at one instant of its animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Opacity applied to background, text and icon.
    pub alpha: f32,
    /// Fraction of the resolved width actually drawn.
    pub width_scale: f32,
}

impl Appearance {
    pub const SETTLED: Appearance = Appearance {
        alpha: 1.0,
        width_scale: 1.0,
    };
}

/// Computes the appearance of a notification at `now`.
#[must_use]
pub fn appearance(handle: &NotificationHandle, now: Instant) -> Appearance {
    let progress = handle.phase_progress(now);
    let (effect, t) = match handle.phase() {
        Phase::Entering { .. } => (handle.entrance().effect(), progress),
        Phase::Dismissing => (handle.exit().effect(), 1.0 - progress),
        Phase::Visible | Phase::Removed => return Appearance::SETTLED,
    };

    match effect {
        AnimationEffect::None => Appearance::SETTLED,
        AnimationEffect::FadeIn | AnimationEffect::FadeOut => Appearance {
            alpha: t,
            width_scale: 1.0,
        },
        AnimationEffect::BounceInDown
        | AnimationEffect::BounceOutUp
        | AnimationEffect::SlideInDown
        | AnimationEffect::SlideOutUp => Appearance {
            alpha: ease_out_cubic(t),
            width_scale: 1.0,
        },
        AnimationEffect::StretchIn => Appearance {
            alpha: 1.0,
            width_scale: ease_out_cubic(t),
        },
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Converts a notification color to an Iced color with the given opacity.
#[must_use]
pub fn to_color(color: HexColor, alpha: f32) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, alpha)
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a notification at `width` logical pixels.
    ///
    /// `custom` builds the body of [`Content::Custom`] notifications from
    /// their content id.
    pub fn view<'a>(
        handle: &'a NotificationHandle,
        width: f32,
        now: Instant,
        custom: &dyn Fn(&'a str) -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        let look = appearance(handle, now);
        let style = handle.style();
        let text_color = to_color(style.text_color, look.alpha);

        let label = |value: &'a str| {
            Text::new(value)
                .size(style.text_size)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(text_color),
                })
        };

        let body: Element<'a, Message> = match handle.content() {
            Content::Text(value) => label(value.as_str()).into(),
            Content::IconText { icon, text } => Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(icons::view(icon, look.alpha))
                .push(Container::new(label(text.as_str())).width(Length::Fill))
                .into(),
            Content::Custom(id) => custom(id.as_str()),
        };

        let background = to_color(style.background, look.alpha);
        let corner_radius = corner_radius(style.corners);

        button(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press(Message::Tapped(handle.key()))
        .padding(spacing::MD)
        .width(Length::Fixed((width * look.width_scale).max(0.0)))
        .style(move |_theme: &Theme, _status| toast_style(background, text_color, corner_radius))
        .into()
    }
}

fn corner_radius(corners: Corners) -> f32 {
    match corners {
        Corners::Rounded => radius::LG,
        Corners::Square => radius::NONE,
    }
}

/// Style function for the toast card.
fn toast_style(background: Color, text_color: Color, corner_radius: f32) -> button::Style {
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color,
        border: iced::Border {
            radius: corner_radius.into(),
            ..Default::default()
        },
        shadow: if background.a > 0.0 {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Placeholder body for custom content without a registered view.
pub fn custom_placeholder<'a>(id: &'a str) -> Element<'a, Message> {
    container(Text::new(id))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
