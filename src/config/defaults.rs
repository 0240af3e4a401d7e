// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Remote endpoint, default user and size-lookup memo capacity
//! - **Gallery**: Row height, tile margin and infinite-scroll trigger

// ==========================================================================
// API Defaults
// ==========================================================================

/// REST endpoint serving both the photo listing and size lookups.
pub const DEFAULT_ENDPOINT: &str = "https://api.flickr.com/services/rest/";

/// Public stream shown when no user id is configured (NASA HQ).
pub const DEFAULT_USER_ID: &str = "35067687@N04";

/// Extra metadata fields requested with every page.
pub const DEFAULT_EXTRAS: [&str; 2] = ["date_upload", "views"];

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "PHOTO_STREAM_API_KEY";

/// Default number of memoized size lookups.
pub const DEFAULT_SIZE_CACHE_ENTRIES: usize = 512;

/// Minimum number of memoized size lookups.
pub const MIN_SIZE_CACHE_ENTRIES: usize = 16;

/// Maximum number of memoized size lookups.
pub const MAX_SIZE_CACHE_ENTRIES: usize = 4096;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Target height of a justified row before shrinking (in pixels).
pub const DEFAULT_ROW_HEIGHT: u32 = 180;

/// Minimum target row height.
pub const MIN_ROW_HEIGHT: u32 = 60;

/// Maximum target row height.
pub const MAX_ROW_HEIGHT: u32 = 600;

/// Horizontal gutter reserved per tile (both sides combined).
pub const DEFAULT_TILE_MARGIN: u32 = 8;

/// Maximum horizontal gutter per tile.
pub const MAX_TILE_MARGIN: u32 = 64;

/// Fraction of the document height at which more photos are requested.
pub const DEFAULT_SCROLL_TRIGGER_RATIO: f32 = 0.8;

/// Minimum scroll trigger ratio.
pub const MIN_SCROLL_TRIGGER_RATIO: f32 = 0.1;

/// Maximum scroll trigger ratio.
pub const MAX_SCROLL_TRIGGER_RATIO: f32 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_height_default_within_bounds() {
        assert!((MIN_ROW_HEIGHT..=MAX_ROW_HEIGHT).contains(&DEFAULT_ROW_HEIGHT));
    }

    #[test]
    fn size_cache_default_within_bounds() {
        assert!(
            (MIN_SIZE_CACHE_ENTRIES..=MAX_SIZE_CACHE_ENTRIES).contains(&DEFAULT_SIZE_CACHE_ENTRIES)
        );
    }

    #[test]
    fn scroll_trigger_default_within_bounds() {
        assert!(DEFAULT_SCROLL_TRIGGER_RATIO >= MIN_SCROLL_TRIGGER_RATIO);
        assert!(DEFAULT_SCROLL_TRIGGER_RATIO <= MAX_SCROLL_TRIGGER_RATIO);
    }
}
