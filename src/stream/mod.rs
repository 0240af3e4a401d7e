// SPDX-License-Identifier: MPL-2.0
//! Photo stream data pipeline: page fetching, size enrichment and pagination.
//!
//! - [`fetcher`]: fetch-enrich-merge of one page through a [`PhotoApi`]
//! - [`coordinator`]: pagination state, infinite-scroll gating and sort selection
//! - [`size_cache`]: bounded memo of size lookups
//!
//! [`PhotoApi`]: crate::application::port::PhotoApi

pub mod coordinator;
pub mod fetcher;
pub mod size_cache;

pub use coordinator::{SortChanged, StreamCoordinator, StreamState};
pub use fetcher::{PageResult, PhotoFetcher};
pub use size_cache::SizeCache;
