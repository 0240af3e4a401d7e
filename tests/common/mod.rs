// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests: an in-memory photo API.

use photo_stream::application::port::{ApiError, PhotoApi, PhotoListing, PhotoQuery};
use photo_stream::config::ApiConfig;
use photo_stream::domain::photo::{PhotoId, PhotoSummary, SizeLabel, SizeVariant};
use photo_stream::domain::stream::PageInfo;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves `total` photos; photo `i` is `400 + 40·(i % 7)` wide and 300 high,
/// uploaded at `i` and viewed `(i * 37) % 101` times.
#[derive(Debug)]
pub struct StubApi {
    pub total: usize,
    pub size_lookups: AtomicUsize,
    pub listings: AtomicUsize,
}

impl StubApi {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            size_lookups: AtomicUsize::new(0),
            listings: AtomicUsize::new(0),
        }
    }
}

pub fn api_config() -> ApiConfig {
    ApiConfig {
        api_key: "integration".into(),
        user_id: "someone@N01".into(),
        endpoint: "http://localhost.invalid/".into(),
        extras: vec!["date_upload".into(), "views".into()],
        size_cache_entries: 256,
    }
}

impl PhotoApi for StubApi {
    async fn list_public_photos(&self, query: &PhotoQuery) -> Result<PhotoListing, ApiError> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        let per_page = query.per_page as usize;
        let start = (query.page as usize - 1) * per_page;
        let end = (start + per_page).min(self.total);
        let photos = (start.min(end)..end)
            .map(|i| PhotoSummary {
                id: PhotoId::new(i.to_string()),
                farm: 1,
                server: "2".into(),
                secret: "abc".into(),
                title: format!("#{i}"),
                date_uploaded: i as i64,
                views: ((i * 37) % 101) as u64,
            })
            .collect();
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
        self.size_lookups.fetch_add(1, Ordering::SeqCst);
        let index: u32 = photo_id
            .as_str()
            .parse()
            .map_err(|_| ApiError::Malformed(format!("unknown photo {photo_id}")))?;
        Ok(vec![
            SizeVariant {
                label: SizeLabel::Thumbnail,
                width: 100,
                height: 75,
                source: String::new(),
            },
            SizeVariant {
                label: SizeLabel::Medium,
                width: 400 + 40 * (index % 7),
                height: 300,
                source: String::new(),
            },
        ])
    }
}
