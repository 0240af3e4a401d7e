// SPDX-License-Identifier: MPL-2.0
//! `photo_stream` is a desktop viewer for a public photo stream, built with
//! the Iced GUI framework.
//!
//! Pages of photo metadata are fetched from a remote REST API, enriched with
//! their size variants, and laid out in a justified-row grid with infinite
//! scroll, sorting and a lightbox.

#![doc(html_root_url = "https://docs.rs/photo_stream/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod infrastructure;
pub mod stream;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
