// SPDX-License-Identifier: MPL-2.0
//! Checkerboard component used as a background for transparent content.
//!
//! Shown behind the current icon so the effect of background removal is
//! visible immediately.

use crate::ui::design_tokens::palette;
use iced::widget::{canvas, Container, Stack};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

const TILE_SIZE: f32 = 16.0;
const DARK_TILE: Color = palette::GRAY_200;

/// Checkerboard pattern widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkerboard;

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Light base coat, then only the dark tiles on top.
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::GRAY_100);

        let tile = Size::new(TILE_SIZE + 0.5, TILE_SIZE + 0.5);
        let mut row = 0u32;
        let mut y = 0.0;
        while y < bounds.height {
            // Dark tiles sit on alternating columns, offset every other row.
            let mut x = if row % 2 == 0 { TILE_SIZE } else { 0.0 };
            while x < bounds.width {
                frame.fill_rectangle(Point::new(x, y), tile, DARK_TILE);
                x += 2.0 * TILE_SIZE;
            }
            row += 1;
            y += TILE_SIZE;
        }

        vec![frame.into_geometry()]
    }
}

/// Helper to wrap arbitrary content with a checkerboard background.
pub fn wrap<'a, Message: 'a>(content: Container<'a, Message>) -> Element<'a, Message> {
    Stack::new()
        .push(
            canvas::Canvas::new(Checkerboard)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(content)
        .into()
}
