// SPDX-License-Identifier: MPL-2.0
//! Scrollable justified grid of thumbnails.
//!
//! Tile sizes come straight from the renderer's [`GridLayout`]; this module
//! only turns them into widgets. Each tile reserves `margin / 2` on both
//! sides, so a full row spans exactly the layout's container width.
//!
//! [`GridLayout`]: crate::gallery::GridLayout

use crate::app::{Message, ScrollMetrics};
use crate::domain::photo::PhotoId;
use crate::gallery::{GridRenderer, LayoutRow};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Padding};
use std::collections::HashMap;

/// Horizontal padding around the grid inside the window.
pub const GRID_PADDING: f32 = spacing::XS;

/// Width reserved for the vertical scrollbar.
pub const SCROLLBAR_RESERVE: f32 = spacing::SM;

/// Container width available to the layout for a given window width.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn container_width(window_width: f32) -> u32 {
    (window_width - 2.0 * GRID_PADDING - SCROLLBAR_RESERVE)
        .max(0.0)
        .floor() as u32
}

/// Everything the grid needs to render one frame.
pub struct ViewContext<'a> {
    pub renderer: &'a GridRenderer,
    pub thumbnails: &'a HashMap<PhotoId, Handle>,
    /// Shown instead of the grid while no photo has been laid out.
    pub empty_message: String,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let layout = ctx.renderer.layout();
    if layout.rows.is_empty() {
        return Container::new(
            Text::new(ctx.empty_message)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into();
    }

    let margin = ctx.renderer.params().margin as f32;
    let rows = layout
        .rows
        .iter()
        .fold(Column::new().spacing(margin), |column, row| {
            column.push(view_row(&ctx, row, margin))
        });

    Scrollable::new(Container::new(rows).padding(Padding::from([margin, GRID_PADDING])))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(ScrollMetrics::from_viewport(&viewport)))
        .into()
}

fn view_row<'a>(ctx: &ViewContext<'a>, row: &'a LayoutRow, margin: f32) -> Element<'a, Message> {
    let photos = ctx.renderer.photos();
    row.tiles
        .iter()
        .filter_map(|tile| photos.get(tile.index).map(|photo| (tile, photo)))
        .fold(Row::new(), |row_widget, (tile, photo)| {
            let width = Length::Fixed(tile.width as f32);
            let height = Length::Fixed(tile.height as f32);

            let content: Element<'a, Message> = match ctx.thumbnails.get(&photo.id) {
                Some(handle) => Image::new(handle.clone())
                    .width(width)
                    .height(height)
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => Container::new(Space::new())
                    .width(width)
                    .height(height)
                    .style(styles::container::placeholder)
                    .into(),
            };

            let tile_button = button(content)
                .padding(0)
                .style(styles::button::tile)
                .on_press(Message::PhotoClicked(tile.index));

            row_widget.push(Container::new(tile_button).padding(Padding {
                left: margin / 2.0,
                right: margin / 2.0,
                ..Padding::ZERO
            }))
        })
        .into()
}
