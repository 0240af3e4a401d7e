// SPDX-License-Identifier: MPL-2.0
//! Flickr REST adapter implementing the [`PhotoApi`] port.
//!
//! Both calls go to the same endpoint with a `method` parameter and
//! `format=json&nojsoncallback=1`. The adapter also downloads raw image bytes
//! for the grid and the lightbox.
//!
//! [`PhotoApi`]: crate::application::port::PhotoApi

mod wire;

use crate::application::port::{ApiError, PhotoApi, PhotoListing, PhotoQuery};
use crate::config::ApiConfig;
use crate::domain::photo::{PhotoId, SizeVariant};
use serde::de::DeserializeOwned;
use std::time::Duration;
use wire::{PhotosBody, SizesBody};

const METHOD_PUBLIC_PHOTOS: &str = "flickr.people.getPublicPhotos";
const METHOD_SIZES: &str = "flickr.photos.getSizes";
const USER_AGENT: &str = concat!("PhotoStream/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one immutable [`ApiConfig`].
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FlickrClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl FlickrClient {
    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    /// Calls one REST method and decodes its `stat`-tagged envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(String, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("method", method),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
                ("nojsoncallback", "1"),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        wire::decode(&body)
    }

    /// Downloads the bytes behind an image URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] or [`ApiError::Status`] on failure.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl PhotoApi for FlickrClient {
    async fn list_public_photos(&self, query: &PhotoQuery) -> Result<PhotoListing, ApiError> {
        let mut params = vec![
            ("user_id".to_string(), query.user_id.clone()),
            ("extras".to_string(), query.extras.join(",")),
            ("page".to_string(), query.page.to_string()),
            ("per_page".to_string(), query.per_page.to_string()),
        ];
        params.extend(query.params.iter().cloned());

        tracing::debug!(page = query.page, per_page = query.per_page, "listing public photos");
        let body: PhotosBody = self.call(METHOD_PUBLIC_PHOTOS, &params).await?;
        body.into_listing()
    }

    async fn photo_sizes(&self, photo_id: &PhotoId) -> Result<Vec<SizeVariant>, ApiError> {
        let params = [("photo_id".to_string(), photo_id.to_string())];
        let body: SizesBody = self.call(METHOD_SIZES, &params).await?;
        body.into_variants()
    }
}
