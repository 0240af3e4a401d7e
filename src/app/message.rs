// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ApiError;
use crate::domain::photo::PhotoId;
use crate::domain::stream::SortOrder;
use crate::error::Error;
use crate::stream::PageResult;
use iced::widget::image::Handle;
use iced::widget::scrollable::Viewport;

/// Scroll position reported by the grid's scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Scroll offset plus viewport height.
    pub viewport_bottom: f32,
    /// Height of the whole scrollable document.
    pub content_height: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            viewport_bottom: viewport.absolute_offset().y + viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A page request finished (initial load or load-more).
    PageLoaded(Result<PageResult, Error>),
    ThumbnailLoaded {
        id: PhotoId,
        result: Result<Handle, ApiError>,
    },
    LargeImageLoaded {
        id: PhotoId,
        result: Result<Handle, ApiError>,
    },
    SortSelected(SortOrder),
    /// A tile was clicked; the index is into the current display order.
    PhotoClicked(usize),
    CloseViewer,
    Scrolled(ScrollMetrics),
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// API key override; takes precedence over `PHOTO_STREAM_API_KEY`.
    pub api_key: Option<String>,
    /// User whose public stream is shown.
    pub user_id: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTO_STREAM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
