// SPDX-License-Identifier: MPL-2.0
//! Photo records and their size variants.

use std::fmt;

/// Host template shared by every static image URL.
const STATIC_HOST: &str = "staticflickr.com";

/// Suffix that selects the large (1024px) rendition.
const LARGE_SUFFIX: &str = "_b";

// =============================================================================
// PhotoId
// =============================================================================

/// Remote identifier of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// SizeLabel
// =============================================================================

/// Rendition tiers published by the photo host, smallest first.
///
/// Unknown labels are kept verbatim so a new tier never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SizeLabel {
    Square,
    LargeSquare,
    Thumbnail,
    Small,
    Small320,
    Small400,
    /// 500px on the longest side; the tier used for grid layout.
    Medium,
    Medium640,
    Medium800,
    Large,
    Large1600,
    Large2048,
    Original,
    Other(String),
}

impl SizeLabel {
    /// The tier whose dimensions drive the justified grid.
    pub const DEFAULT: SizeLabel = SizeLabel::Medium;

    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "Square" => SizeLabel::Square,
            "Large Square" => SizeLabel::LargeSquare,
            "Thumbnail" => SizeLabel::Thumbnail,
            "Small" => SizeLabel::Small,
            "Small 320" => SizeLabel::Small320,
            "Small 400" => SizeLabel::Small400,
            "Medium" => SizeLabel::Medium,
            "Medium 640" => SizeLabel::Medium640,
            "Medium 800" => SizeLabel::Medium800,
            "Large" => SizeLabel::Large,
            "Large 1600" => SizeLabel::Large1600,
            "Large 2048" => SizeLabel::Large2048,
            "Original" => SizeLabel::Original,
            other => SizeLabel::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SizeLabel::Square => "Square",
            SizeLabel::LargeSquare => "Large Square",
            SizeLabel::Thumbnail => "Thumbnail",
            SizeLabel::Small => "Small",
            SizeLabel::Small320 => "Small 320",
            SizeLabel::Small400 => "Small 400",
            SizeLabel::Medium => "Medium",
            SizeLabel::Medium640 => "Medium 640",
            SizeLabel::Medium800 => "Medium 800",
            SizeLabel::Large => "Large",
            SizeLabel::Large1600 => "Large 1600",
            SizeLabel::Large2048 => "Large 2048",
            SizeLabel::Original => "Original",
            SizeLabel::Other(label) => label,
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SizeVariant
// =============================================================================

/// One available pixel rendition of a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeVariant {
    pub label: SizeLabel,
    pub width: u32,
    pub height: u32,
    /// Direct image URL for this rendition.
    pub source: String,
}

// =============================================================================
// PhotoSummary / PhotoRecord
// =============================================================================

/// Photo metadata as listed by the remote feed, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSummary {
    pub id: PhotoId,
    pub farm: u32,
    pub server: String,
    pub secret: String,
    pub title: String,
    /// Upload time as a unix timestamp in seconds.
    pub date_uploaded: i64,
    pub views: u64,
}

/// A photo enriched with derived URLs and, once merged, its size variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub farm: u32,
    pub server: String,
    pub secret: String,
    pub title: String,
    pub date_uploaded: i64,
    pub views: u64,
    pub url_default: String,
    pub url_large: String,
    /// Empty until the size lookup for this photo has been merged.
    pub sizes: Vec<SizeVariant>,
}

impl PhotoRecord {
    /// Builds a record from listed metadata, deriving both image URLs.
    #[must_use]
    pub fn from_summary(summary: PhotoSummary) -> Self {
        let url_default = static_url(&summary, "");
        let url_large = static_url(&summary, LARGE_SUFFIX);
        Self {
            id: summary.id,
            farm: summary.farm,
            server: summary.server,
            secret: summary.secret,
            title: summary.title,
            date_uploaded: summary.date_uploaded,
            views: summary.views,
            url_default,
            url_large,
            sizes: Vec::new(),
        }
    }

    /// Returns `true` once the size variants have been merged.
    #[must_use]
    pub fn is_layout_ready(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Looks up a rendition by label.
    #[must_use]
    pub fn size(&self, label: &SizeLabel) -> Option<&SizeVariant> {
        self.sizes.iter().find(|size| &size.label == label)
    }

    /// Rendition used for grid layout.
    #[must_use]
    pub fn default_size(&self) -> Option<&SizeVariant> {
        self.size(&SizeLabel::DEFAULT)
    }
}

fn static_url(summary: &PhotoSummary, suffix: &str) -> String {
    format!(
        "https://farm{farm}.{STATIC_HOST}/{server}/{id}_{secret}{suffix}.jpg",
        farm = summary.farm,
        server = summary.server,
        id = summary.id,
        secret = summary.secret,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> PhotoSummary {
        PhotoSummary {
            id: PhotoId::new("52114"),
            farm: 66,
            server: "65535".into(),
            secret: "a1b2c3".into(),
            title: "Launch".into(),
            date_uploaded: 1_480_000_000,
            views: 12,
        }
    }

    #[test]
    fn urls_follow_static_template() {
        let record = PhotoRecord::from_summary(summary());
        assert_eq!(
            record.url_default,
            "https://farm66.staticflickr.com/65535/52114_a1b2c3.jpg"
        );
        assert_eq!(
            record.url_large,
            "https://farm66.staticflickr.com/65535/52114_a1b2c3_b.jpg"
        );
    }

    #[test]
    fn record_is_not_layout_ready_before_sizes_merge() {
        let mut record = PhotoRecord::from_summary(summary());
        assert!(!record.is_layout_ready());
        assert!(record.default_size().is_none());

        record.sizes.push(SizeVariant {
            label: SizeLabel::Medium,
            width: 500,
            height: 333,
            source: "m.jpg".into(),
        });
        assert!(record.is_layout_ready());
        assert_eq!(record.default_size().map(|s| s.width), Some(500));
    }

    #[test]
    fn default_size_matches_label_not_position() {
        let mut record = PhotoRecord::from_summary(summary());
        record.sizes = vec![
            SizeVariant {
                label: SizeLabel::Large,
                width: 1024,
                height: 683,
                source: "b.jpg".into(),
            },
            SizeVariant {
                label: SizeLabel::Medium,
                width: 500,
                height: 333,
                source: "m.jpg".into(),
            },
        ];
        assert_eq!(record.default_size().map(|s| s.height), Some(333));
    }

    #[test]
    fn size_labels_round_trip_known_and_unknown() {
        assert_eq!(SizeLabel::parse("Large Square"), SizeLabel::LargeSquare);
        assert_eq!(SizeLabel::parse("Medium").as_str(), "Medium");
        let unknown = SizeLabel::parse("X-Large 3K");
        assert_eq!(unknown, SizeLabel::Other("X-Large 3K".into()));
        assert_eq!(unknown.to_string(), "X-Large 3K");
    }
}
