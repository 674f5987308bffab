// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The controls fill the window and the notification overlay is stacked on
//! top of them.

use super::message::Demo;
use super::update::CUSTOM_CONTENT_ID;
use super::Message;
use crate::config::Position;
use crate::notifications::{self, NotificationManager};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{overlay, toast};
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub manager: &'a NotificationManager,
    pub position: Position,
    pub viewport_width: f32,
    pub now: Instant,
    pub last_error: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = overlay::view(
        ctx.manager,
        ctx.position,
        ctx.viewport_width,
        ctx.now,
        &custom_content,
    )
    .map(Message::Notification);

    Stack::new()
        .push(controls(&ctx))
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Popup notifications").size(typography::TITLE_MD);

    let demos = Demo::ALL.iter().fold(
        Column::new().spacing(spacing::XS),
        |column, demo| column.push(control_button(demo.label(), Message::Show(*demo))),
    );

    let position_label = match ctx.position {
        Position::Top => "Stack at bottom",
        Position::Bottom => "Stack at top",
    };
    let actions = Column::new()
        .spacing(spacing::XS)
        .push(control_button("Dismiss newest", Message::DismissNewest))
        .push(control_button("Remove oldest", Message::RemoveOldest))
        .push(control_button("Clear all", Message::ClearAll))
        .push(control_button(position_label, Message::TogglePosition));

    let status = Text::new(format!("{} active", ctx.manager.len())).size(typography::CAPTION);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::CONTROLS_WIDTH))
        .push(title)
        .push(Row::new().spacing(spacing::MD).push(demos).push(actions))
        .push(status);

    if let Some(error) = ctx.last_error {
        content = content.push(
            Text::new(error.to_string())
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_100),
                }),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

fn control_button(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .width(Length::Fill)
        .into()
}

/// Body of custom-content notifications.
fn custom_content(id: &str) -> Element<'_, notifications::Message> {
    if id == CUSTOM_CONTENT_ID {
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Custom content").size(typography::TITLE_MD))
            .push(Text::new("Rendered by the host application").size(typography::CAPTION))
            .into()
    } else {
        toast::custom_placeholder(id)
    }
}
