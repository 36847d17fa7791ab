// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (generate, export).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Secondary action button (make transparent, clear all).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette();
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(base.background.strong.color)),
            text_color: base.background.base.text,
            border: Border {
                color: base.background.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(base.background.weak.color)),
            text_color: palette::GRAY_400,
            border: Border {
                color: base.background.weak.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(base.background.weak.color)),
            text_color: base.background.base.text,
            border: Border {
                color: base.background.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for a style-catalog row; selected rows get the brand accent.
pub fn style_row(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette();
        let highlighted = selected || status == button::Status::Hovered;

        button::Style {
            background: Some(Background::Color(if selected {
                palette::PRIMARY_100
            } else if highlighted {
                base.background.weak.color
            } else {
                base.background.base.color
            })),
            text_color: if selected {
                palette::PRIMARY_700
            } else {
                base.background.base.text
            },
            border: Border {
                color: if selected {
                    palette::PRIMARY_500
                } else {
                    base.background.strong.color
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Small destructive button (delete thumbnail).
pub fn destructive(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ERROR_500,
        _ => palette::GRAY_700,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless thumbnail button; the selected thumbnail gets an accent ring.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: if selected {
                palette::PRIMARY_500
            } else if status == button::Status::Hovered {
                palette::GRAY_400
            } else {
                palette::GRAY_200
            },
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
