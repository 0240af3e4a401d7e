// SPDX-License-Identifier: MPL-2.0
//! Top bar with the sort selector and the stream status line.

use crate::app::Message;
use crate::domain::stream::SortOrder;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Status shown on the right of the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Loaded { shown: usize, total: Option<u64> },
    Failed(String),
}

impl Status {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Status::Loading => "Loading photos…".to_string(),
            Status::Loaded {
                shown,
                total: Some(total),
            } => format!("{shown} of {total} photos"),
            Status::Loaded { shown, total: None } => format!("{shown} photos"),
            Status::Failed(reason) => reason.clone(),
        }
    }
}

pub fn view(active: SortOrder, status: &Status) -> Element<'_, Message> {
    let buttons = SortOrder::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &sort| {
            let style = if sort == active {
                styles::button::selected
            } else {
                styles::button::toolbar
            };
            row.push(
                button(Text::new(sort.label()).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(style)
                    .on_press(Message::SortSelected(sort)),
            )
        });

    let status_color = match status {
        Status::Failed(_) => palette::ERROR_500,
        _ => palette::GRAY_400,
    };

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Sort by").size(typography::BODY))
        .push(buttons)
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(status.text())
                .size(typography::CAPTION)
                .color(status_color),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}
