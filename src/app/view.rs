// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Sidebar on the left, workspace in the middle, history strip at the
//! bottom; a full-window overlay covers everything while a generation is in
//! flight.

use super::{App, Message};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::history_strip;
use crate::ui::prompt_panel;
use crate::ui::styles::container as container_styles;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::workspace;
use iced::widget::{text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let sidebar = app
        .prompt_panel
        .view(prompt_panel::ViewEnv {
            can_submit: app.session.can_submit(app.prompt_panel.prompt()),
            is_generating: app.session.is_generating(),
            error: app.session.error_message(),
        })
        .map(Message::PromptPanel);

    let stage = workspace::view(workspace::ViewEnv {
        icon: app.current.as_ref().map(|c| &c.icon),
        handle: app.current.as_ref().map(|c| &c.handle),
        removal_in_progress: app.session.removal_in_progress(),
        removal_warning: app.removal_warning.as_deref(),
        spinner_rotation: app.spinner_rotation,
    })
    .map(Message::Workspace);

    let mut main_column = Column::new().push(
        Container::new(stage)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if !app.strip_entries.is_empty() {
        let strip = history_strip::view(history_strip::ViewEnv {
            entries: &app.strip_entries,
            current: app.current.as_ref().map(|c| c.icon.id),
        })
        .map(Message::HistoryStrip);
        main_column = main_column.push(strip);
    }

    let layout = Row::new()
        .push(sidebar)
        .push(main_column.width(Length::Fill).height(Length::Fill));

    let base = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill);

    if app.session.is_generating() {
        Stack::new()
            .push(base)
            .push(generating_overlay(app.spinner_rotation))
            .into()
    } else {
        base.into()
    }
}

/// Full-window overlay shown while the remote call is in flight.
fn generating_overlay<'a>(spinner_rotation: f32) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_400, spinner_rotation)
        .with_size(sizing::ICON_XL * 2.0)
        .into_element();

    let headline = Text::new("Generating icon").size(typography::TITLE_SM);

    let caption = Text::new("Composing constraints and rendering geometry…")
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_200),
        });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(spinner)
            .push(headline)
            .push(caption),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(container_styles::busy_overlay)
    .into()
}
