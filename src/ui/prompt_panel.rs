// SPDX-License-Identifier: MPL-2.0
//! Sidebar component: prompt input, style selection, and the generate action.

use crate::styles::IconStyle;
use crate::ui::components::error_banner;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the sidebar widgets.
#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    StyleSelected(IconStyle),
    Submit,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The user asked for a generation with the current prompt and style.
    Generate { prompt: String, style: IconStyle },
}

/// Sidebar state: the draft prompt and the selected style.
#[derive(Debug, Clone)]
pub struct State {
    prompt: String,
    selected_style: IconStyle,
}

impl State {
    #[must_use]
    pub fn new(default_style: IconStyle) -> Self {
        Self {
            prompt: String::new(),
            selected_style: default_style,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn selected_style(&self) -> IconStyle {
        self.selected_style
    }

    /// Handles a sidebar message; `Submit` surfaces as a [`Effect::Generate`].
    ///
    /// Gating (empty prompt, in-flight generation) is the session machine's
    /// job; the panel only reports intent.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::PromptChanged(value) => {
                self.prompt = value;
                Effect::None
            }
            Message::StyleSelected(style) => {
                self.selected_style = style;
                Effect::None
            }
            Message::Submit => Effect::Generate {
                prompt: self.prompt.clone(),
                style: self.selected_style,
            },
        }
    }
}

/// Environment information required to render the sidebar.
pub struct ViewEnv<'a> {
    /// Whether a submit would currently start a generation.
    pub can_submit: bool,
    /// Whether a generation is in flight (changes the button label).
    pub is_generating: bool,
    /// Error message from the last failed attempt, if any.
    pub error: Option<&'a str>,
}

impl State {
    pub fn view(&self, env: ViewEnv<'_>) -> Element<'_, Message> {
        let title = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new("IconForge").size(typography::TITLE_MD))
            .push(
                Text::new("AI icon studio")
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    }),
            );

        let prompt_label = Text::new("Design concept").size(typography::BODY_SM);
        let prompt_input = text_input("e.g. A robotic hummingbird with liquid gold wings", &self.prompt)
            .on_input(Message::PromptChanged)
            .on_submit(Message::Submit)
            .padding(spacing::SM)
            .size(typography::BODY);

        let hint = Text::new(
            "To prevent text generation, focus on objects and shapes. Avoid words \
             like \"logo\" or \"label\".",
        )
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

        let style_label = Text::new("Visual aesthetic").size(typography::BODY_SM);
        let mut style_rows = Column::new().spacing(spacing::XXS);
        for style in IconStyle::all() {
            style_rows = style_rows.push(self.style_row(*style));
        }

        let generate_label = if env.is_generating {
            "Generating…"
        } else {
            "Generate icon"
        };
        let mut generate = button(
            Text::new(generate_label)
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(button_styles::primary);
        if env.can_submit {
            generate = generate.on_press(Message::Submit);
        }

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .push(title)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(prompt_label)
                    .push(prompt_input)
                    .push(hint),
            )
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(style_label)
                    .push(style_rows),
            )
            .push(generate);

        if let Some(message) = env.error {
            content = content.push(error_banner::view(error_banner::Severity::Error, message));
        }

        content = content.push(Space::new().height(Length::Fill)).push(
            Text::new("Powered by a remote generative image service")
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

        Container::new(content)
            .height(Length::Fill)
            .style(container_styles::sidebar)
            .into()
    }

    fn style_row(&self, style: IconStyle) -> Element<'_, Message> {
        let selected = style == self.selected_style;

        let bullet = Text::new("•")
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(if selected {
                    palette::PRIMARY_500
                } else {
                    palette::GRAY_400
                }),
            });

        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(bullet)
            .push(Text::new(style.name()).size(typography::BODY));

        button(row)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(button_styles::style_row(selected))
            .on_press(Message::StyleSelected(style))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_changes_accumulate() {
        let mut state = State::new(IconStyle::default());
        state.handle_message(Message::PromptChanged("a fox".to_string()));
        assert_eq!(state.prompt(), "a fox");
    }

    #[test]
    fn style_selection_updates_state() {
        let mut state = State::new(IconStyle::default());
        let effect = state.handle_message(Message::StyleSelected(IconStyle::CyberNeon));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.selected_style(), IconStyle::CyberNeon);
    }

    #[test]
    fn submit_reports_current_prompt_and_style() {
        let mut state = State::new(IconStyle::SoftClay);
        state.handle_message(Message::PromptChanged("a robotic hummingbird".to_string()));

        let effect = state.handle_message(Message::Submit);
        assert_eq!(
            effect,
            Effect::Generate {
                prompt: "a robotic hummingbird".to_string(),
                style: IconStyle::SoftClay,
            }
        );
    }

    #[test]
    fn submit_with_empty_prompt_still_reports_intent() {
        // The session machine rejects it; the panel does not second-guess.
        let mut state = State::new(IconStyle::default());
        let effect = state.handle_message(Message::Submit);
        assert!(matches!(effect, Effect::Generate { .. }));
    }
}
