// SPDX-License-Identifier: MPL-2.0
//! Horizontal strip of history thumbnails with per-entry delete and clear-all.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use iced::widget::{button, image, scrollable, text, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};
use uuid::Uuid;

/// Messages emitted by the history strip.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show this entry as the current icon.
    Select(Uuid),
    /// Delete this entry.
    Delete(Uuid),
    /// Wipe the entire history (after confirmation).
    ClearAll,
}

/// A renderable history entry: the icon id plus its decoded display handle.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: Uuid,
    pub handle: image::Handle,
}

/// Environment information required to render the strip.
pub struct ViewEnv<'a> {
    pub entries: &'a [Entry],
    /// Id of the icon currently on stage, for the accent ring.
    pub current: Option<Uuid>,
}

/// Renders the strip; call only when the history is non-empty.
pub fn view(env: ViewEnv<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("Library")
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("Clear all").size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(button_styles::destructive)
                .on_press(Message::ClearAll),
        );

    let mut thumbnails = Row::new().spacing(spacing::SM);
    for entry in env.entries {
        thumbnails = thumbnails.push(thumbnail(entry, env.current == Some(entry.id)));
    }

    let strip = scrollable(thumbnails.padding([0.0, spacing::XXS]))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(strip),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HISTORY_STRIP_HEIGHT))
    .padding(spacing::MD)
    .style(container_styles::history_strip)
    .into()
}

fn thumbnail(entry: &Entry, selected: bool) -> Element<'_, Message> {
    let picture = image(entry.handle.clone())
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .content_fit(ContentFit::Cover);

    let select = button(picture)
        .padding(0)
        .style(button_styles::thumbnail(selected))
        .on_press(Message::Select(entry.id));

    let delete = button(Text::new("×").size(typography::CAPTION))
        .padding([0.0, spacing::XXS])
        .style(button_styles::destructive)
        .on_press(Message::Delete(entry.id));

    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Top)
        .push(select)
        .push(delete)
        .into()
}
