// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the stream pipeline and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The stream pipeline is generic over the ports it uses
//!
//! # Example
//!
//! ```ignore
//! use photo_stream::application::port::PhotoApi;
//! use photo_stream::infrastructure::flickr::FlickrClient;
//! use photo_stream::stream::PhotoFetcher;
//!
//! let client = FlickrClient::new(&api_config)?;
//! let fetcher = PhotoFetcher::new(client, &api_config);
//! ```

pub mod port;
