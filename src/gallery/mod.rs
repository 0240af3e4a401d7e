// SPDX-License-Identifier: MPL-2.0
//! Justified photo grid.
//!
//! - [`layout`]: pure justified-row packing
//! - [`sort`]: upload-date and views orderings
//! - [`renderer`]: photo list, layout passes, resize handling and selection
//! - [`scroll`]: infinite-scroll trigger

pub mod layout;
pub mod renderer;
pub mod scroll;
pub mod sort;

pub use layout::{GridLayout, LayoutError, LayoutParams, LayoutRow, NaturalSize, Tile};
pub use renderer::{GridRenderer, ResizeBinding};
pub use scroll::ScrollTrigger;
pub use sort::sort_photos;
