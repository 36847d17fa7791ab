// SPDX-License-Identifier: MPL-2.0
//! Workspace pane: current icon stage, post-processing actions, empty state.

use crate::history::GeneratedIcon;
use crate::ui::components::{checkerboard, error_banner};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, text, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Fixed output size of the generation endpoint, shown as a badge.
const OUTPUT_SIZE_LABEL: &str = "1024 × 1024";

/// Messages emitted by the workspace actions.
#[derive(Debug, Clone)]
pub enum Message {
    /// Run background removal on the current icon.
    MakeTransparent,
    /// Export the current icon to disk.
    Export,
}

/// Environment information required to render the workspace.
pub struct ViewEnv<'a> {
    /// The icon currently on stage, if any.
    pub icon: Option<&'a GeneratedIcon>,
    /// Decoded display handle for the current icon.
    pub handle: Option<&'a image::Handle>,
    /// Whether background removal is running (shows the overlay).
    pub removal_in_progress: bool,
    /// Warning from a failed background removal, cleared on the next action.
    pub removal_warning: Option<&'a str>,
    /// Spinner angle, advanced by the tick subscription.
    pub spinner_rotation: f32,
}

/// Renders the workspace pane.
pub fn view(env: ViewEnv<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match (env.icon, env.handle) {
        (Some(icon), Some(handle)) => icon_stage(icon, handle, &env),
        _ => empty_state(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

fn icon_stage<'a>(
    icon: &'a GeneratedIcon,
    handle: &'a image::Handle,
    env: &ViewEnv<'a>,
) -> Element<'a, Message> {
    let picture = image(handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    // Checkerboard behind the image makes transparency visible after removal.
    let mut stage_layers = Stack::new()
        .push(checkerboard::wrap(
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        ));

    if env.removal_in_progress {
        stage_layers = stage_layers.push(removal_overlay(env.spinner_rotation));
    }

    let stage = Container::new(stage_layers)
        .width(Length::Fixed(sizing::STAGE_MAX))
        .height(Length::Fixed(sizing::STAGE_MAX))
        .style(container_styles::stage)
        .clip(true);

    let mut actions = Row::new().spacing(spacing::MD);

    let mut transparent_button = button(
        Text::new("Make transparent")
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center),
    )
    .padding(spacing::SM)
    .style(button_styles::secondary);
    if !env.removal_in_progress {
        transparent_button = transparent_button.on_press(Message::MakeTransparent);
    }
    actions = actions.push(transparent_button);

    actions = actions.push(
        button(
            Text::new("Export PNG")
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        )
        .padding(spacing::SM)
        .style(button_styles::primary)
        .on_press(Message::Export),
    );

    let badges = Row::new()
        .spacing(spacing::SM)
        .push(badge(OUTPUT_SIZE_LABEL))
        .push(badge(&icon.style));

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(stage)
        .push(actions)
        .push(badges);

    if let Some(warning) = env.removal_warning {
        column = column.push(
            Container::new(error_banner::view(
                error_banner::Severity::Warning,
                warning,
            ))
            .width(Length::Fixed(sizing::STAGE_MAX)),
        );
    }

    column.into()
}

fn removal_overlay<'a>(spinner_rotation: f32) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_400, spinner_rotation).into_element();

    let label = Text::new("Removing background…")
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WHITE),
        });

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(spinner)
            .push(label),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(container_styles::busy_overlay)
    .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let heading = Text::new("Craft your vision").size(typography::TITLE_MD);

    let body = Text::new(
        "Describe an icon in the sidebar to generate professional, high-fidelity \
         assets for modern interfaces.",
    )
    .size(typography::BODY)
    .align_x(alignment::Horizontal::Center)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    });

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .max_width(420.0)
        .push(heading)
        .push(body)
        .into()
}

fn badge<'a>(label: &str) -> Element<'a, Message> {
    Container::new(Text::new(label.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(container_styles::badge)
        .into()
}
