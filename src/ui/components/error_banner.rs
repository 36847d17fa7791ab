// SPDX-License-Identifier: MPL-2.0
//! Inline banner for errors and warnings.
//!
//! Rendered in place (sidebar or workspace) rather than as a floating toast:
//! the message belongs next to the control that produced it.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Critical error - the operation failed (red)
    #[default]
    Error,
    /// Warning - state was preserved but an action did not apply (orange)
    Warning,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Severity::Error => "Generation failed",
            Severity::Warning => "Warning",
        }
    }
}

/// Renders a banner with a severity accent, title, and message body.
pub fn view<'a, Message: 'a>(severity: Severity, message: &str) -> Element<'a, Message> {
    let accent = severity.color();

    let title = Text::new(severity.title())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let body = Text::new(message.to_string()).size(typography::BODY_SM);

    let content = Column::new().spacing(spacing::XXS).push(title).push(body);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| {
            let base = theme.extended_palette();
            container::Style {
                background: Some(Background::Color(base.background.weak.color)),
                border: Border {
                    color: accent,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                text_color: Some(theme.palette().text),
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Error.color().r, Severity::Warning.color().r);
    }

    #[test]
    fn default_severity_is_error() {
        assert_eq!(Severity::default(), Severity::Error);
    }
}
