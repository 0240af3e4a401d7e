// SPDX-License-Identifier: MPL-2.0
//! Modal overlay showing the large rendition of the selected photo.
//!
//! Clicking anywhere on the backdrop, or pressing Escape, closes it.

use crate::app::Message;
use crate::domain::photo::PhotoRecord;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::DateTime;
use iced::widget::image::{Handle, Image};
use iced::widget::{mouse_area, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Formats a unix upload timestamp as a calendar date (UTC).
#[must_use]
pub fn format_upload_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Unknown date".to_string())
}

/// Caption line under the image: date and view count.
#[must_use]
pub fn caption_details(photo: &PhotoRecord) -> String {
    let views = if photo.views == 1 { "view" } else { "views" };
    format!(
        "Uploaded {} · {} {views}",
        format_upload_date(photo.date_uploaded),
        photo.views
    )
}

pub fn view<'a>(photo: &'a PhotoRecord, large: Option<&'a Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match large {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(Text::new("Loading…").size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    let title = if photo.title.is_empty() {
        "Untitled"
    } else {
        photo.title.as_str()
    };

    let caption = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(title).size(typography::TITLE_MD))
            .push(Text::new(caption_details(photo)).size(typography::CAPTION)),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::caption);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(picture)
        .push(caption);

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::backdrop);

    mouse_area(backdrop).on_press(Message::CloseViewer).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    #[test]
    fn upload_date_is_formatted_in_utc() {
        assert_eq!(format_upload_date(1_480_000_000), "November 24, 2016");
        assert_eq!(format_upload_date(0), "January 1, 1970");
    }

    #[test]
    fn out_of_range_timestamp_is_unknown() {
        assert_eq!(format_upload_date(i64::MAX), "Unknown date");
    }

    #[test]
    fn caption_pluralizes_views() {
        let mut photo = record("a", 500, 333);
        photo.date_uploaded = 0;
        photo.views = 1;
        assert_eq!(caption_details(&photo), "Uploaded January 1, 1970 · 1 view");
        photo.views = 12;
        assert!(caption_details(&photo).ends_with("12 views"));
    }
}
