// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`flickr`]: Flickr REST API over `reqwest` (implements [`PhotoApi`])
//!
//! [`PhotoApi`]: crate::application::port::PhotoApi

pub mod flickr;

pub use flickr::FlickrClient;
