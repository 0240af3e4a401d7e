// SPDX-License-Identifier: MPL-2.0
//! Stream domain types.

pub mod newtypes;

pub use newtypes::{viewport_bounds, PageInfo, PageSizeTier, SortOrder};
