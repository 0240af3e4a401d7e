// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core types with no infrastructure dependencies.
//!
//! This module contains pure domain types and value objects. Apart from
//! `serde` derives on persisted enums it depends only on `std`, which keeps
//! it trivially testable.
//!
//! # Modules
//!
//! - [`photo`]: Photo records ([`PhotoRecord`](photo::PhotoRecord),
//!   [`SizeVariant`](photo::SizeVariant), [`SizeLabel`](photo::SizeLabel))
//! - [`stream`]: Stream value objects ([`PageSizeTier`](stream::PageSizeTier),
//!   [`SortOrder`](stream::SortOrder), [`PageInfo`](stream::PageInfo))

pub mod photo;
pub mod stream;
