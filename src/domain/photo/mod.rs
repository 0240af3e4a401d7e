// SPDX-License-Identifier: MPL-2.0
//! Photo domain types.
//!
//! A [`PhotoRecord`] is built from a listed [`PhotoSummary`] and becomes
//! layout-ready once its [`SizeVariant`]s are merged in.

pub mod types;

pub use types::{PhotoId, PhotoRecord, PhotoSummary, SizeLabel, SizeVariant};
