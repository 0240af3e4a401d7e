// SPDX-License-Identifier: MPL-2.0
//! Root view: toolbar above the grid, lightbox stacked on top when open.

use super::{App, Message};
use crate::ui::{grid, lightbox, toolbar};
use iced::widget::{Column, Stack};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let empty_message = match &self.status {
            toolbar::Status::Loaded { .. } => String::from("No photos to show"),
            other => other.text(),
        };

        let base = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(toolbar::view(self.renderer.sort(), &self.status))
            .push(grid::view(grid::ViewContext {
                renderer: &self.renderer,
                thumbnails: &self.thumbnails,
                empty_message,
            }));

        match self.renderer.selected() {
            Some(photo) => Stack::new()
                .push(base)
                .push(lightbox::view(photo, self.large_images.get(&photo.id)))
                .into(),
            None => base.into(),
        }
    }
}
