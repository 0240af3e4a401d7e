// SPDX-License-Identifier: MPL-2.0
//! Remote photo API port definition.
//!
//! This module defines the [`PhotoApi`] trait for the two read-only calls the
//! stream needs: listing a user's public photos and looking up the size
//! variants of one photo. The Flickr adapter lives in
//! [`crate::infrastructure::flickr`]; tests use an in-memory fake.

use crate::domain::photo::{PhotoId, PhotoSummary, SizeVariant};
use crate::domain::stream::PageInfo;
use std::future::Future;
use thiserror::Error;

// =============================================================================
// ApiError
// =============================================================================

/// Errors that can occur while talking to the remote photo API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The API answered `stat = "fail"`.
    #[error("remote error {code}: {message}")]
    Remote { code: i64, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

// =============================================================================
// Request / Response types
// =============================================================================

/// Parameters of one "list public photos" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoQuery {
    pub user_id: String,
    pub page: u32,
    pub per_page: u32,
    /// Extra fields requested alongside the basic metadata.
    pub extras: Vec<String>,
    /// Additional raw query parameters supplied by the caller.
    pub params: Vec<(String, String)>,
}

/// One page of listed photos with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoListing {
    pub photos: Vec<PhotoSummary>,
    pub page_info: PageInfo,
}

// =============================================================================
// PhotoApi Trait
// =============================================================================

/// Port for the remote photo-hosting API.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` and return `Send` futures so fetches
/// can run on the async runtime behind Iced tasks.
pub trait PhotoApi: Send + Sync {
    /// Lists one page of a user's public photos.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status,
    /// remote failure or undecodable body.
    fn list_public_photos(
        &self,
        query: &PhotoQuery,
    ) -> impl Future<Output = Result<PhotoListing, ApiError>> + Send;

    /// Fetches every available rendition of a photo, in API order.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PhotoApi::list_public_photos`].
    fn photo_sizes(
        &self,
        photo_id: &PhotoId,
    ) -> impl Future<Output = Result<Vec<SizeVariant>, ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP status 503");
        let err = ApiError::Remote {
            code: 1,
            message: "User not found".into(),
        };
        assert_eq!(err.to_string(), "remote error 1: User not found");
        assert!(ApiError::Malformed("missing field `photos`".into())
            .to_string()
            .contains("photos"));
    }
}
