//! Attraction records and the paged response envelope.
//!
//! Shapes mirror the JSON served by the Taipei Travel Open API. The
//! upstream payload carries many more fields than we render; serde skips
//! unknown keys, and scalar fields the API sometimes omits are defaulted
//! so that filtering and rendering stay total.

use serde::Deserialize;

/// Fixed number of records per server page.
///
/// The "has another page" heuristic keys off this threshold, never off the
/// reported total: a page shorter than `PAGE_SIZE` is taken as the last one.
pub const PAGE_SIZE: usize = 30;

/// One attraction record from the currently loaded page.
///
/// Immutable value data: a page load replaces the whole set, it never
/// merges. `id` is unique within a single fetched page; nothing is
/// guaranteed across pages and no cross-page dedup is attempted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attraction {
    /// Upstream identity.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Free-text introduction. May contain CR/LF runs straight from the
    /// upstream CMS.
    #[serde(default)]
    pub introduction: String,
    /// Ordered image descriptors; possibly empty.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Ordered category tags; possibly empty.
    #[serde(default)]
    pub category: Vec<CategoryTag>,
    /// Contact phone number, when published.
    #[serde(default)]
    pub tel: Option<String>,
    /// Opening hours, free text.
    #[serde(default)]
    pub open_time: Option<String>,
    /// Official website URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Last-modified timestamp, as the API serializes it.
    #[serde(default)]
    pub modified: String,
}

impl Attraction {
    /// Name of the first category tag, the one the card badge shows.
    pub fn primary_category(&self) -> Option<&str> {
        self.category.first().map(|c| c.name.as_str())
    }

    /// URL of the first image, when any is published.
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(|i| i.src.as_str())
    }

    /// `modified` parsed to a calendar date, if the timestamp is in one of
    /// the shapes the API is known to emit (RFC 3339 or a bare
    /// `YYYY-MM-DD HH:MM:SS`). `None` means "render the raw string".
    pub fn modified_date(&self) -> Option<chrono::NaiveDate> {
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&self.modified) {
            return Some(dt.date_naive());
        }
        chrono::NaiveDateTime::parse_from_str(&self.modified, "%Y-%m-%d %H:%M:%S")
            .map(|dt| dt.date())
            .ok()
    }
}

/// Image descriptor attached to an attraction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRef {
    /// Image URL.
    #[serde(default)]
    pub src: String,
    /// Caption, when the CMS provides one.
    #[serde(default)]
    pub subject: Option<String>,
}

/// Category tag attached to an attraction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryTag {
    /// Upstream tag identity.
    pub id: u64,
    /// Tag label.
    pub name: String,
}

/// Envelope returned by the attractions endpoint.
///
/// Both fields are optional on purpose: `data: None` is how a malformed
/// success is represented (the state machine classifies it), and a missing
/// `total` is treated as unknown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    /// Records for the requested page, bounded by [`PAGE_SIZE`].
    #[serde(default)]
    pub data: Option<Vec<Attraction>>,
    /// Count of attractions across all pages, not just this one.
    #[serde(default)]
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": 163,
            "name": "Taipei 101",
            "address": "No. 7, Section 5, Xinyi Road",
            "introduction": "Landmark tower.",
            "images": [{"src": "https://example.test/101.jpg", "subject": "tower"}],
            "category": [{"id": 13, "name": "Attractions"}],
            "tel": "+886-2-8101-8800",
            "open_time": "09:00-22:00",
            "url": "https://www.taipei-101.com.tw",
            "modified": "2024-03-01 08:30:00"
        }"#;

        let attraction: Attraction = serde_json::from_str(json).unwrap();
        assert_eq!(attraction.id, 163);
        assert_eq!(attraction.primary_category(), Some("Attractions"));
        assert_eq!(attraction.first_image(), Some("https://example.test/101.jpg"));
        assert_eq!(
            attraction.modified_date(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn deserializes_sparse_record_with_defaults() {
        let attraction: Attraction = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(attraction.name, "");
        assert_eq!(attraction.address, "");
        assert!(attraction.images.is_empty());
        assert!(attraction.category.is_empty());
        assert_eq!(attraction.tel, None);
        assert_eq!(attraction.primary_category(), None);
        assert_eq!(attraction.first_image(), None);
    }

    #[test]
    fn ignores_unknown_upstream_fields() {
        let json = r#"{"id": 2, "name": "Shrine", "zipcode": "104", "nlat": 25.07}"#;
        let attraction: Attraction = serde_json::from_str(json).unwrap();
        assert_eq!(attraction.name, "Shrine");
    }

    #[test]
    fn envelope_with_null_data_is_representable() {
        let response: ApiResponse = serde_json::from_str(r#"{"data": null, "total": 5}"#).unwrap();
        assert_eq!(response.data, None);
        assert_eq!(response.total, Some(5));
    }

    #[test]
    fn envelope_with_missing_fields_defaults_to_none() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.data, None);
        assert_eq!(response.total, None);
    }

    #[test]
    fn modified_date_falls_back_to_none_for_odd_formats() {
        let attraction: Attraction =
            serde_json::from_str(r#"{"id": 3, "modified": "last Tuesday"}"#).unwrap();
        assert_eq!(attraction.modified_date(), None);
    }

    #[test]
    fn modified_date_parses_rfc3339() {
        let attraction: Attraction =
            serde_json::from_str(r#"{"id": 4, "modified": "2022-08-16T10:57:15+08:00"}"#).unwrap();
        assert_eq!(
            attraction.modified_date(),
            chrono::NaiveDate::from_ymd_opt(2022, 8, 16)
        );
    }
}
