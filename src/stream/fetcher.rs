// SPDX-License-Identifier: MPL-2.0
//! Fetch-enrich-merge pipeline for one page of the photo stream.
//!
//! A page is produced in three steps:
//!
//! 1. One metadata request for the page.
//! 2. One size lookup per returned photo, issued concurrently and served from
//!    the [`SizeCache`] when possible.
//! 3. A positional merge once every lookup has resolved.
//!
//! Any failure rejects the whole page; callers never see a partial list.

use super::size_cache::SizeCache;
use crate::application::port::{ApiError, PhotoApi, PhotoQuery};
use crate::config::ApiConfig;
use crate::domain::photo::{PhotoId, PhotoRecord, SizeVariant};
use crate::domain::stream::{PageInfo, PageSizeTier};
use crate::error::Result;
use futures_util::future::try_join_all;
use std::sync::{Arc, Mutex, PoisonError};

/// One fully enriched page of photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Records in API order, each with its size variants merged.
    pub photos: Vec<PhotoRecord>,
    pub page_info: PageInfo,
}

/// Fetches pages of a user's public photos through a [`PhotoApi`].
#[derive(Debug)]
pub struct PhotoFetcher<A> {
    api: A,
    user_id: String,
    extras: Vec<String>,
    tier: Mutex<PageSizeTier>,
    sizes: SizeCache,
}

impl<A: PhotoApi> PhotoFetcher<A> {
    /// Creates a fetcher for the stream described by `config`.
    #[must_use]
    pub fn new(api: A, config: &ApiConfig) -> Self {
        Self {
            api,
            user_id: config.user_id.clone(),
            extras: config.extras.clone(),
            tier: Mutex::new(PageSizeTier::default()),
            sizes: SizeCache::new(config.size_cache_entries),
        }
    }

    /// Sets the page size used by subsequent fetches.
    pub fn set_page_size(&self, tier: PageSizeTier) {
        *self.tier.lock().unwrap_or_else(PoisonError::into_inner) = tier;
    }

    #[must_use]
    pub fn page_size(&self) -> PageSizeTier {
        *self.tier.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn size_cache(&self) -> &SizeCache {
        &self.sizes
    }

    /// Fetches page `page` (1-based) and enriches every photo on it.
    ///
    /// `params` are appended verbatim to the metadata request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`](crate::error::Error::Api) if the metadata
    /// request or any size lookup fails.
    pub async fn fetch_page(&self, page: u32, params: &[(String, String)]) -> Result<PageResult> {
        let query = PhotoQuery {
            user_id: self.user_id.clone(),
            page,
            per_page: self.page_size().per_page(),
            extras: self.extras.clone(),
            params: params.to_vec(),
        };

        let listing = self.api.list_public_photos(&query).await.map_err(|err| {
            tracing::warn!(page, error = %err, "photo listing failed");
            err
        })?;

        let mut photos: Vec<PhotoRecord> = listing
            .photos
            .into_iter()
            .map(PhotoRecord::from_summary)
            .collect();

        let lookups: Vec<_> = photos
            .iter()
            .map(|photo| self.lookup_sizes(&photo.id))
            .collect();
        let sizes = try_join_all(lookups).await.map_err(|err| {
            tracing::warn!(page, error = %err, "size lookup failed; dropping page");
            err
        })?;

        for (photo, sizes) in photos.iter_mut().zip(sizes) {
            photo.sizes = Vec::clone(&sizes);
        }

        tracing::debug!(
            page,
            photos = photos.len(),
            total = listing.page_info.total_count,
            "page enriched"
        );

        Ok(PageResult {
            photos,
            page_info: listing.page_info,
        })
    }

    async fn lookup_sizes(&self, id: &PhotoId) -> std::result::Result<Arc<Vec<SizeVariant>>, ApiError> {
        if let Some(hit) = self.sizes.get(id) {
            return Ok(hit);
        }
        let sizes = Arc::new(self.api.photo_sizes(id).await?);
        self.sizes.insert(id.clone(), Arc::clone(&sizes));
        Ok(sizes)
    }
}
