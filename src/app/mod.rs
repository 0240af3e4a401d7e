// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the stream pipeline and
//! the grid.
//!
//! The `App` struct owns the [`StreamCoordinator`], the [`GridRenderer`] and
//! the scroll trigger, and translates messages into page requests, image
//! downloads and layout passes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, ScrollMetrics};

use crate::config::{self, ApiOverrides, GallerySettings};
use crate::domain::photo::PhotoId;
use crate::error::Result;
use crate::gallery::{GridRenderer, LayoutParams, ScrollTrigger};
use crate::infrastructure::FlickrClient;
use crate::stream::{PhotoFetcher, StreamCoordinator};
use crate::ui::toolbar::Status;
use iced::widget::image::Handle;
use iced::{window, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    /// `None` when the API configuration is unusable; the status explains why.
    stream: Option<Stream>,
    renderer: GridRenderer,
    scroll: ScrollTrigger,
    thumbnails: HashMap<PhotoId, Handle>,
    large_images: HashMap<PhotoId, Handle>,
    status: Status,
    /// Set until the first window size arrives and activates the stream.
    awaiting_window: bool,
}

/// Network side of the app: the page coordinator and the image downloader.
struct Stream {
    coordinator: StreamCoordinator<FlickrClient>,
    images: FlickrClient,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.renderer.photos().len())
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Merges CLI flags over environment overrides; CLI values win.
fn api_overrides(flags: &Flags, env: ApiOverrides) -> ApiOverrides {
    ApiOverrides {
        api_key: flags.api_key.clone().or(env.api_key),
        user_id: flags.user_id.clone().or(env.user_id),
    }
}

fn build_stream(api: &config::ApiConfig, settings: &GallerySettings) -> Result<Stream> {
    let client = FlickrClient::new(api)?;
    let fetcher = Arc::new(PhotoFetcher::new(client.clone(), api));
    Ok(Stream {
        coordinator: StreamCoordinator::new(fetcher, settings.sort_order),
        images: client,
    })
}

impl App {
    /// Loads the configuration and builds the stream. The first page is
    /// requested once the window reports its real size.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let settings = config.gallery_settings();

        let overrides = api_overrides(&flags, ApiOverrides::from_env());
        let stream = config
            .api_config(&overrides)
            .and_then(|api| build_stream(&api, &settings));

        let mut app = App::with_stream(&settings, stream);
        if let (Some(warning), Some(_)) = (config_warning, &app.stream) {
            app.status = Status::Failed(warning);
        }
        (app, Task::none())
    }

    fn with_stream(settings: &GallerySettings, stream: Result<Stream>) -> Self {
        // Zero until the window size is known.
        let params = LayoutParams {
            container_width: 0,
            row_height: settings.row_height,
            margin: settings.tile_margin,
        };

        let mut app = App {
            stream: None,
            renderer: GridRenderer::new(params, settings.sort_order),
            scroll: ScrollTrigger::new(settings.scroll_trigger_ratio),
            thumbnails: HashMap::new(),
            large_images: HashMap::new(),
            status: Status::Loading,
            awaiting_window: true,
        };

        match stream {
            Ok(stream) => app.stream = Some(stream),
            Err(err) => {
                tracing::error!(error = %err, "photo stream unavailable");
                app.status = Status::Failed(err.to_string());
            }
        }
        app
    }

    fn title(&self) -> String {
        String::from("PhotoStream")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stream::{PageSizeTier, SortOrder};

    #[test]
    fn cli_flags_win_over_environment() {
        let flags = Flags {
            api_key: Some("cli".into()),
            user_id: None,
            config_dir: None,
        };
        let env = ApiOverrides {
            api_key: Some("env".into()),
            user_id: Some("env-user".into()),
        };

        let merged = api_overrides(&flags, env);
        assert_eq!(merged.api_key.as_deref(), Some("cli"));
        assert_eq!(merged.user_id.as_deref(), Some("env-user"));
    }

    fn app_for(settings: &GallerySettings) -> App {
        let stream = build_stream(&crate::test_utils::api_config(), settings);
        App::with_stream(settings, stream)
    }

    fn coordinator(app: &App) -> &StreamCoordinator<FlickrClient> {
        let Some(stream) = app.stream.as_ref() else {
            panic!("stream should be built from a valid config");
        };
        &stream.coordinator
    }

    #[test]
    fn first_window_size_picks_the_page_size() {
        let mut app = app_for(&GallerySettings::default());
        assert!(!coordinator(&app).is_loading());
        assert_eq!(app.renderer.params().container_width, 0);

        let _ = app.update(Message::WindowResized(iced::Size::new(420.0, 700.0)));

        assert!(coordinator(&app).is_loading());
        assert_eq!(coordinator(&app).state().page_size, PageSizeTier::Small);
        assert_eq!(
            app.renderer.params().container_width,
            crate::ui::grid::container_width(420.0)
        );
    }

    #[test]
    fn later_resizes_only_relayout() {
        let mut app = app_for(&GallerySettings::default());
        let _ = app.update(Message::WindowResized(iced::Size::new(640.0, 700.0)));
        let _ = app.update(Message::WindowResized(iced::Size::new(1600.0, 900.0)));

        assert_eq!(coordinator(&app).state().page_size, PageSizeTier::Medium);
        assert_eq!(
            app.renderer.params().container_width,
            crate::ui::grid::container_width(1600.0)
        );
    }

    #[test]
    fn configured_sort_reaches_renderer_and_coordinator() {
        let settings = GallerySettings {
            sort_order: SortOrder::Views,
            ..GallerySettings::default()
        };
        let app = app_for(&settings);
        assert_eq!(app.renderer.sort(), SortOrder::Views);
        assert_eq!(coordinator(&app).state().selected_sort, SortOrder::Views);
    }

    #[test]
    fn window_settings_respect_minimum() {
        let settings = window_settings();
        let Some(min) = settings.min_size else {
            panic!("minimum window size must be set");
        };
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
