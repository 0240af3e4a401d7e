// SPDX-License-Identifier: MPL-2.0
//! Stream value objects: page-size tiers, sort orders and page metadata.

use std::fmt;

// =============================================================================
// Page Size Bounds
// =============================================================================

/// Viewport breakpoints (in logical pixels) used to pick a page size.
pub mod viewport_bounds {
    /// Viewports narrower than this fetch [`Small`](super::PageSizeTier::Small) pages.
    pub const SMALL_MAX_WIDTH: f32 = 500.0;
    /// Viewports narrower than this fetch [`Medium`](super::PageSizeTier::Medium) pages.
    pub const MEDIUM_MAX_WIDTH: f32 = 800.0;
}

// =============================================================================
// PageSizeTier
// =============================================================================

/// How many photos a single page request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSizeTier {
    /// 15 photos per page.
    Small,
    /// 30 photos per page.
    Medium,
    /// 60 photos per page.
    #[default]
    Large,
}

impl PageSizeTier {
    /// Parses the short labels `"sm"` and `"md"`; anything else is `Large`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "sm" => PageSizeTier::Small,
            "md" => PageSizeTier::Medium,
            _ => PageSizeTier::Large,
        }
    }

    /// Chooses a tier so that narrow viewports fetch smaller payloads.
    #[must_use]
    pub fn for_viewport_width(width: f32) -> Self {
        if width < viewport_bounds::SMALL_MAX_WIDTH {
            PageSizeTier::Small
        } else if width < viewport_bounds::MEDIUM_MAX_WIDTH {
            PageSizeTier::Medium
        } else {
            PageSizeTier::Large
        }
    }

    #[must_use]
    pub fn per_page(self) -> u32 {
        match self {
            PageSizeTier::Small => 15,
            PageSizeTier::Medium => 30,
            PageSizeTier::Large => 60,
        }
    }
}

// =============================================================================
// SortOrder
// =============================================================================

/// Ordering applied to the accumulated photo list. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recently uploaded first.
    #[default]
    UploadDate,
    /// Most viewed first.
    Views,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::UploadDate, SortOrder::Views];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::UploadDate => "Upload Date",
            SortOrder::Views => "Views",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// PageInfo
// =============================================================================

/// Pagination metadata returned alongside a page of photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    /// 1-based page number this result belongs to.
    pub page: u32,
    pub total_pages: u32,
    /// Total photos available in the whole stream.
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_labels_map_to_fixed_page_sizes() {
        assert_eq!(PageSizeTier::from_label("sm").per_page(), 15);
        assert_eq!(PageSizeTier::from_label("md").per_page(), 30);
        assert_eq!(PageSizeTier::from_label("lg").per_page(), 60);
        assert_eq!(PageSizeTier::from_label("").per_page(), 60);
    }

    #[test]
    fn viewport_width_breakpoints() {
        assert_eq!(PageSizeTier::for_viewport_width(320.0), PageSizeTier::Small);
        assert_eq!(PageSizeTier::for_viewport_width(499.9), PageSizeTier::Small);
        assert_eq!(PageSizeTier::for_viewport_width(500.0), PageSizeTier::Medium);
        assert_eq!(PageSizeTier::for_viewport_width(799.0), PageSizeTier::Medium);
        assert_eq!(PageSizeTier::for_viewport_width(800.0), PageSizeTier::Large);
        assert_eq!(PageSizeTier::for_viewport_width(1920.0), PageSizeTier::Large);
    }

    #[test]
    fn sort_order_labels() {
        assert_eq!(SortOrder::UploadDate.to_string(), "Upload Date");
        assert_eq!(SortOrder::Views.label(), "Views");
        assert_eq!(SortOrder::default(), SortOrder::UploadDate);
    }
}
