// SPDX-License-Identifier: MPL-2.0
//! Message handling for the root [`App`].

use super::{App, Message, ScrollMetrics};
use crate::application::port::ApiError;
use crate::domain::photo::{PhotoId, PhotoRecord};
use crate::domain::stream::SortOrder;
use crate::error::Error;
use crate::gallery::LayoutError;
use crate::infrastructure::FlickrClient;
use crate::stream::PageResult;
use crate::ui::{grid, toolbar::Status};
use iced::widget::image::Handle;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageLoaded(result) => self.on_page_loaded(result),
            Message::ThumbnailLoaded { id, result } => {
                match result {
                    Ok(handle) => {
                        self.thumbnails.insert(id, handle);
                    }
                    Err(err) => tracing::debug!(photo = %id, error = %err, "thumbnail failed"),
                }
                Task::none()
            }
            Message::LargeImageLoaded { id, result } => {
                match result {
                    Ok(handle) => {
                        self.large_images.insert(id, handle);
                    }
                    Err(err) => tracing::warn!(photo = %id, error = %err, "large image failed"),
                }
                Task::none()
            }
            Message::SortSelected(sort) => {
                self.on_sort_selected(sort);
                Task::none()
            }
            Message::PhotoClicked(index) => self.on_photo_clicked(index),
            Message::CloseViewer => {
                self.renderer.close_viewer();
                Task::none()
            }
            Message::Scrolled(metrics) => self.on_scrolled(metrics),
            Message::WindowResized(size) => self.on_window_resized(size),
        }
    }

    fn on_page_loaded(&mut self, result: Result<PageResult, Error>) -> Task<Message> {
        let Some(stream) = self.stream.as_mut() else {
            return Task::none();
        };
        let initial = stream.coordinator.state().total_photos_available.is_none();

        let photos = match stream.coordinator.apply_page(result) {
            Ok(photos) => photos,
            Err(err) => {
                if initial {
                    self.status = Status::Failed(err.to_string());
                }
                // A later scroll may retry the same page.
                self.scroll.complete(self.document_height());
                return Task::none();
            }
        };

        let downloads = thumbnail_tasks(&stream.images, &photos);
        let total = stream.coordinator.state().total_photos_available;

        let laid_out = if initial {
            self.renderer.replace(photos)
        } else {
            self.renderer.append(photos)
        };
        match laid_out {
            Ok(()) => {
                self.status = Status::Loaded {
                    shown: self.renderer.photos().len(),
                    total,
                };
            }
            Err(err) => self.on_layout_error(&err),
        }

        if self.scroll.is_busy() {
            self.scroll.complete(self.document_height());
        }
        Task::batch(downloads)
    }

    fn on_window_resized(&mut self, size: iced::Size) -> Task<Message> {
        if let Err(err) = self.renderer.resize(grid::container_width(size.width)) {
            self.on_layout_error(&err);
        }
        if !std::mem::take(&mut self.awaiting_window) {
            return Task::none();
        }

        // First known size: pick the page size from it and load page 1.
        match self
            .stream
            .as_mut()
            .and_then(|stream| stream.coordinator.activate(size.width))
        {
            Some(request) => Task::perform(request, Message::PageLoaded),
            None => Task::none(),
        }
    }

    fn on_sort_selected(&mut self, sort: SortOrder) {
        let Some(stream) = self.stream.as_mut() else {
            return;
        };
        let Some(changed) = stream.coordinator.select_sort(sort) else {
            return;
        };
        if let Err(err) = self.renderer.apply_sort(changed.sort) {
            self.on_layout_error(&err);
        }
    }

    fn on_photo_clicked(&mut self, index: usize) -> Task<Message> {
        let Some(photo) = self.renderer.view_photo(index) else {
            return Task::none();
        };
        if self.large_images.contains_key(&photo.id) {
            return Task::none();
        }
        let Some(stream) = self.stream.as_ref() else {
            return Task::none();
        };
        download(&stream.images, photo.id.clone(), photo.url_large.clone(), |id, result| {
            Message::LargeImageLoaded { id, result }
        })
    }

    fn on_scrolled(&mut self, metrics: ScrollMetrics) -> Task<Message> {
        if !self
            .scroll
            .on_scroll(metrics.viewport_bottom, metrics.content_height)
        {
            return Task::none();
        }

        let request = self
            .stream
            .as_mut()
            .and_then(|stream| stream.coordinator.load_more());
        match request {
            Some(request) => Task::perform(request, Message::PageLoaded),
            None => {
                // Exhausted: nothing will be laid out, release right away.
                self.scroll.complete(metrics.content_height);
                Task::none()
            }
        }
    }

    fn on_layout_error(&mut self, err: &LayoutError) {
        tracing::error!(error = %err, "layout failed");
        self.status = Status::Failed(Error::from(err.clone()).to_string());
    }

    /// Height of the scrollable document for the current layout.
    fn document_height(&self) -> f32 {
        let margin = self.renderer.params().margin;
        let rows = self.renderer.layout().content_height(margin);
        (rows + 2 * margin) as f32
    }
}

fn thumbnail_tasks(client: &FlickrClient, photos: &[PhotoRecord]) -> Vec<Task<Message>> {
    photos
        .iter()
        .map(|photo| {
            download(client, photo.id.clone(), photo.url_default.clone(), |id, result| {
                Message::ThumbnailLoaded { id, result }
            })
        })
        .collect()
}

fn download(
    client: &FlickrClient,
    id: PhotoId,
    url: String,
    to_message: fn(PhotoId, Result<Handle, ApiError>) -> Message,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.fetch_image(&url).await.map(Handle::from_bytes) },
        move |result| to_message(id, result),
    )
}
