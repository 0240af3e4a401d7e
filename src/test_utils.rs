// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and an in-memory photo API.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::{ApiError, PhotoApi, PhotoListing, PhotoQuery};
use crate::config::{ApiConfig, DEFAULT_ENDPOINT, DEFAULT_EXTRAS, DEFAULT_SIZE_CACHE_ENTRIES};
use crate::domain::photo::{PhotoId, PhotoRecord, PhotoSummary, SizeLabel, SizeVariant};
use crate::domain::stream::PageInfo;
use std::sync::{Mutex, PoisonError};

/// Natural height of every fake Medium rendition.
pub const FAKE_MEDIUM_HEIGHT: u32 = 333;

/// API configuration pointing at nothing, for fetchers built on fakes.
pub fn api_config() -> ApiConfig {
    ApiConfig {
        api_key: "test-key".into(),
        user_id: "tester@N01".into(),
        endpoint: DEFAULT_ENDPOINT.into(),
        extras: DEFAULT_EXTRAS.iter().map(ToString::to_string).collect(),
        size_cache_entries: DEFAULT_SIZE_CACHE_ENTRIES,
    }
}

/// Builds a layout-ready record with a Medium rendition of the given size.
pub fn record(id: &str, width: u32, height: u32) -> PhotoRecord {
    let mut record = PhotoRecord::from_summary(PhotoSummary {
        id: PhotoId::new(id),
        farm: 1,
        server: "1".into(),
        secret: "s".into(),
        title: id.into(),
        date_uploaded: 0,
        views: 0,
    });
    record.sizes = vec![SizeVariant {
        label: SizeLabel::Medium,
        width,
        height,
        source: format!("https://example.invalid/{id}.jpg"),
    }];
    record
}

/// In-memory [`PhotoApi`] serving a stream of `total` synthetic photos.
///
/// Every call is recorded; failures can be injected per photo or for the
/// listing.
#[derive(Debug, Default)]
pub struct FakePhotoApi {
    total: usize,
    list_calls: Mutex<Vec<PhotoQuery>>,
    size_calls: Mutex<Vec<PhotoId>>,
    failing_sizes: Mutex<Vec<PhotoId>>,
    listing_error: Mutex<Option<ApiError>>,
}

impl FakePhotoApi {
    pub fn with_photos(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn id_for(index: usize) -> PhotoId {
        PhotoId::new(format!("p{index}"))
    }

    /// Medium width of the photo at `index`; varies so rows differ.
    pub fn width_for(index: usize) -> u32 {
        300 + (index as u32 * 37) % 400
    }

    pub fn views_for(index: usize) -> u64 {
        (index as u64 * 7919) % 1000
    }

    pub fn fail_sizes_for(&self, id: PhotoId) {
        lock(&self.failing_sizes).push(id);
    }

    pub fn fail_listing(&self, err: ApiError) {
        *lock(&self.listing_error) = Some(err);
    }

    pub fn clear_failures(&self) {
        lock(&self.failing_sizes).clear();
        *lock(&self.listing_error) = None;
    }

    pub fn list_calls(&self) -> Vec<PhotoQuery> {
        lock(&self.list_calls).clone()
    }

    pub fn size_calls(&self) -> Vec<PhotoId> {
        lock(&self.size_calls).clone()
    }

    fn summary(index: usize) -> PhotoSummary {
        PhotoSummary {
            id: Self::id_for(index),
            farm: 66,
            server: "65535".into(),
            secret: format!("s{index}"),
            title: format!("Photo {index}"),
            date_uploaded: 1_480_000_000 + index as i64 * 60,
            views: Self::views_for(index),
        }
    }

    fn index_of(id: &PhotoId) -> Option<usize> {
        id.as_str().strip_prefix('p')?.parse().ok()
    }
}

impl PhotoApi for FakePhotoApi {
    async fn list_public_photos(&self, query: &PhotoQuery) -> Result<PhotoListing, ApiError> {
        lock(&self.list_calls).push(query.clone());
        if let Some(err) = lock(&self.listing_error).clone() {
            return Err(err);
        }

        let per_page = query.per_page.max(1) as usize;
        let start = (query.page.max(1) as usize - 1) * per_page;
        let end = (start + per_page).min(self.total);
        let photos = (start.min(end)..end).map(Self::summary).collect();

        Ok(PhotoListing {
            photos,
            page_info: PageInfo {
                page: query.page,
                total_pages: self.total.div_ceil(per_page) as u32,
                total_count: self.total as u64,
            },
        })
    }

    async fn photo_sizes(&self, photo_id: &PhotoId) -> Result<Vec<SizeVariant>, ApiError> {
        lock(&self.size_calls).push(photo_id.clone());
        if lock(&self.failing_sizes).contains(photo_id) {
            return Err(ApiError::Transport(format!("connection reset for {photo_id}")));
        }
        let index = Self::index_of(photo_id)
            .ok_or_else(|| ApiError::Remote {
                code: 1,
                message: "Photo not found".into(),
            })?;

        Ok(vec![
            SizeVariant {
                label: SizeLabel::Square,
                width: 75,
                height: 75,
                source: format!("https://example.invalid/{photo_id}_s.jpg"),
            },
            SizeVariant {
                label: SizeLabel::Medium,
                width: Self::width_for(index),
                height: FAKE_MEDIUM_HEIGHT,
                source: format!("https://example.invalid/{photo_id}.jpg"),
            },
            SizeVariant {
                label: SizeLabel::Large,
                width: Self::width_for(index) * 2,
                height: FAKE_MEDIUM_HEIGHT * 2,
                source: format!("https://example.invalid/{photo_id}_b.jpg"),
            },
        ])
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
