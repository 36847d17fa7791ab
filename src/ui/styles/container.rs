// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sidebar panel holding the prompt form.
pub fn sidebar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(base.background.weak.color)),
        border: Border {
            color: base.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        text_color: Some(base.background.base.text),
        ..Default::default()
    }
}

/// Rounded card framing the current icon.
pub fn stage(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(base.background.base.color)),
        border: Border {
            color: base.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Semi-transparent overlay shown above the icon while removal runs.
pub fn busy_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Footer strip housing the history thumbnails.
pub fn history_strip(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(base.background.weak.color)),
        border: Border {
            color: base.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Small pill badge (style name, output size).
pub fn badge(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(base.background.weak.color)),
        border: Border {
            color: base.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        text_color: Some(base.secondary.base.text),
        ..Default::default()
    }
}
