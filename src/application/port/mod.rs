// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the stream pipeline remains
//! independent of the HTTP client.
//!
//! # Available Ports
//!
//! - [`photo_api`]: Listing public photos and looking up their size variants
//!
//! # Design Notes
//!
//! - Traits use domain types only (no `reqwest` or `serde_json` types)
//! - Traits are `Send + Sync`, and their futures are `Send`
//! - Methods return `Result` with [`ApiError`]

pub mod photo_api;

pub use photo_api::{ApiError, PhotoApi, PhotoListing, PhotoQuery};
