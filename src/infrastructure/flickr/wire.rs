// SPDX-License-Identifier: MPL-2.0
//! JSON shapes of the Flickr REST responses and their conversion into
//! domain types.
//!
//! Flickr is loose with numeric types: `total`, `width`, `views` and
//! `dateupload` show up as strings or numbers depending on the call, so
//! every numeric field goes through [`Numeric`].

use crate::application::port::{ApiError, PhotoListing};
use crate::domain::photo::{PhotoId, PhotoSummary, SizeLabel, SizeVariant};
use crate::domain::stream::PageInfo;
use serde::de::DeserializeOwned;
use serde::Deserialize;

// =============================================================================
// Envelope
// =============================================================================

/// Every response carries `stat`; failures add `code` and `message`.
#[derive(Debug, Deserialize)]
#[serde(tag = "stat", rename_all = "lowercase")]
pub(crate) enum Envelope<T> {
    Ok(T),
    Fail {
        #[serde(default)]
        code: i64,
        #[serde(default)]
        message: String,
    },
}

impl<T> Envelope<T> {
    pub(crate) fn into_result(self) -> Result<T, ApiError> {
        match self {
            Envelope::Ok(body) => Ok(body),
            Envelope::Fail { code, message } => Err(ApiError::Remote { code, message }),
        }
    }
}

/// Decodes a response body and unwraps its envelope.
///
/// Syntax and shape errors keep serde's line and column in the message.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    envelope.into_result()
}

// =============================================================================
// Numeric
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Numeric {
    Int(i64),
    Text(String),
}

impl Numeric {
    fn parse<N: TryFrom<i64> + std::str::FromStr>(&self, field: &str) -> Result<N, ApiError> {
        let parsed = match self {
            Numeric::Int(value) => N::try_from(*value).ok(),
            Numeric::Text(text) => text.trim().parse::<N>().ok(),
        };
        parsed.ok_or_else(|| {
            ApiError::Malformed(format!("invalid numeric field `{field}`: {:?}", self))
        })
    }
}

// =============================================================================
// flickr.people.getPublicPhotos
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct PhotosBody {
    pub photos: PhotoPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhotoPage {
    pub page: Numeric,
    pub pages: Numeric,
    pub total: Numeric,
    #[serde(default)]
    pub photo: Vec<WirePhoto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePhoto {
    pub id: String,
    pub secret: String,
    pub server: String,
    pub farm: Numeric,
    #[serde(default)]
    pub title: String,
    pub dateupload: Numeric,
    pub views: Numeric,
}

impl PhotosBody {
    pub(crate) fn into_listing(self) -> Result<PhotoListing, ApiError> {
        let page = self.photos;
        let page_info = PageInfo {
            page: page.page.parse("page")?,
            total_pages: page.pages.parse("pages")?,
            total_count: page.total.parse("total")?,
        };
        let photos = page
            .photo
            .into_iter()
            .map(WirePhoto::into_summary)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PhotoListing { photos, page_info })
    }
}

impl WirePhoto {
    fn into_summary(self) -> Result<PhotoSummary, ApiError> {
        Ok(PhotoSummary {
            farm: self.farm.parse("farm")?,
            date_uploaded: self.dateupload.parse("dateupload")?,
            views: self.views.parse("views")?,
            id: PhotoId::new(self.id),
            server: self.server,
            secret: self.secret,
            title: self.title,
        })
    }
}

// =============================================================================
// flickr.photos.getSizes
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct SizesBody {
    pub sizes: SizeList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SizeList {
    #[serde(default)]
    pub size: Vec<WireSize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSize {
    pub label: String,
    pub width: Numeric,
    pub height: Numeric,
    pub source: String,
}

impl SizesBody {
    pub(crate) fn into_variants(self) -> Result<Vec<SizeVariant>, ApiError> {
        self.sizes
            .size
            .into_iter()
            .map(|size| {
                Ok(SizeVariant {
                    width: size.width.parse("width")?,
                    height: size.height.parse("height")?,
                    label: SizeLabel::parse(&size.label),
                    source: size.source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_listing(json: &str) -> Result<PhotoListing, ApiError> {
        decode::<PhotosBody>(json.as_bytes())?.into_listing()
    }

    #[test]
    fn truncated_body_reports_position() {
        let err = decode::<SizesBody>(br#"{"stat": "ok", "sizes": "#).expect_err("truncated");
        let ApiError::Malformed(message) = err else {
            panic!("expected Malformed, got {err:?}");
        };
        assert!(message.contains("line 1"), "{message}");
    }

    #[test]
    fn decodes_listing_with_string_and_number_fields() {
        let json = r#"{
            "photos": {
                "page": 1, "pages": 12, "perpage": 30, "total": "345",
                "photo": [
                    {"id": "1", "owner": "u", "secret": "s1", "server": "65535", "farm": 66,
                     "title": "Moon", "ispublic": 1, "dateupload": "1480000000", "views": "20"},
                    {"id": "2", "owner": "u", "secret": "s2", "server": "65535", "farm": "66",
                     "title": "", "ispublic": 1, "dateupload": 1480000100, "views": 5}
                ]
            },
            "stat": "ok"
        }"#;

        let listing = decode_listing(json).expect("valid listing");
        assert_eq!(listing.page_info.page, 1);
        assert_eq!(listing.page_info.total_pages, 12);
        assert_eq!(listing.page_info.total_count, 345);
        assert_eq!(listing.photos.len(), 2);
        assert_eq!(listing.photos[0].views, 20);
        assert_eq!(listing.photos[0].title, "Moon");
        assert_eq!(listing.photos[1].farm, 66);
        assert_eq!(listing.photos[1].date_uploaded, 1_480_000_100);
    }

    #[test]
    fn remote_failure_becomes_remote_error() {
        let json = r#"{"stat": "fail", "code": 100, "message": "Invalid API Key (Key has invalid format)"}"#;
        let err = decode_listing(json).expect_err("fail stat");
        assert!(matches!(err, ApiError::Remote { code: 100, .. }));
    }

    #[test]
    fn non_numeric_views_are_malformed() {
        let json = r#"{"stat": "ok", "photos": {"page": 1, "pages": 1, "total": 1, "photo": [
            {"id": "1", "secret": "s", "server": "1", "farm": 1, "dateupload": "1", "views": "lots"}
        ]}}"#;
        let err = decode_listing(json).expect_err("bad views");
        assert!(matches!(err, ApiError::Malformed(msg) if msg.contains("views")));
    }

    #[test]
    fn string_views_sort_numerically() {
        let json = r#"{"stat": "ok", "photos": {"page": 1, "pages": 1, "total": "3", "photo": [
            {"id": "a", "secret": "s", "server": "1", "farm": 1, "dateupload": "1", "views": "5"},
            {"id": "b", "secret": "s", "server": "1", "farm": 1, "dateupload": "2", "views": "20"},
            {"id": "c", "secret": "s", "server": "1", "farm": 1, "dateupload": "3", "views": "3"}
        ]}}"#;
        let listing = decode_listing(json).expect("valid listing");
        let mut photos: Vec<_> = listing
            .photos
            .into_iter()
            .map(crate::domain::photo::PhotoRecord::from_summary)
            .collect();

        crate::gallery::sort::sort_photos(&mut photos, crate::domain::stream::SortOrder::Views);

        let views: Vec<u64> = photos.iter().map(|p| p.views).collect();
        assert_eq!(views, vec![20, 5, 3]);
    }

    #[test]
    fn decodes_sizes_in_api_order() {
        let json = r#"{"sizes": {"canblog": 0, "size": [
            {"label": "Square", "width": 75, "height": 75, "source": "https://x/sq.jpg", "media": "photo"},
            {"label": "Medium", "width": "500", "height": "333", "source": "https://x/m.jpg", "media": "photo"},
            {"label": "X-Large 3K", "width": 3072, "height": 2048, "source": "https://x/3k.jpg", "media": "photo"}
        ]}, "stat": "ok"}"#;
        let envelope: Envelope<SizesBody> = serde_json::from_str(json).expect("valid json");
        let sizes = envelope
            .into_result()
            .and_then(SizesBody::into_variants)
            .expect("valid sizes");

        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes[0].label, SizeLabel::Square);
        assert_eq!(sizes[1].label, SizeLabel::Medium);
        assert_eq!((sizes[1].width, sizes[1].height), (500, 333));
        assert_eq!(sizes[2].label, SizeLabel::Other("X-Large 3K".into()));
    }
}
