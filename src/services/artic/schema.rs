//! Artwork schema for the Art Institute of Chicago API
//!
//! The wire types mirror the JSON the API returns, with every optional field
//! modelled as `Option`. Conversion into [`Artwork`] fills in the display
//! defaults, so nothing downstream ever sees a missing value except the image
//! id, whose absence means "no image available".

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ValidationError;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_ARTIST: &str = "Unknown Artist";
pub const DEFAULT_DATE: &str = "Date unknown";
pub const DEFAULT_MEDIUM: &str = "Medium unknown";
pub const DEFAULT_DIMENSIONS: &str = "Dimensions not available";

/// A single artwork, fully populated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artwork {
    pub id: u64,
    pub title: String,
    pub artist_title: String,
    pub image_id: Option<String>,
    pub date_display: String,
    pub medium_display: String,
    pub dimensions: String,
    pub credit_line: String,
    pub department_title: String,
    pub artwork_type_title: String,
    pub is_public_domain: bool,
}

impl Artwork {
    /// Date text, or `None` when only the placeholder is known
    pub fn known_date(&self) -> Option<&str> {
        non_placeholder(&self.date_display, DEFAULT_DATE)
    }

    /// Medium text, or `None` when only the placeholder is known
    pub fn known_medium(&self) -> Option<&str> {
        non_placeholder(&self.medium_display, DEFAULT_MEDIUM)
    }
}

fn non_placeholder<'a>(value: &'a str, placeholder: &str) -> Option<&'a str> {
    if value.is_empty() || value == placeholder {
        None
    } else {
        Some(value)
    }
}

/// Pagination block of a search response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

/// The `config` block every response carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub iiif_url: String,
    pub website_url: String,
}

/// One validated page of search results, in server order
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkPage {
    pub artworks: Vec<Artwork>,
    pub pagination: Pagination,
    pub info: ApiInfo,
}

impl ArtworkPage {
    /// Total number of matches on the server, across all pages
    pub fn total(&self) -> u64 {
        self.pagination.total
    }
}

// A null title or public-domain flag is a type error; only absence
// falls back to the default.
#[derive(Debug, Deserialize)]
struct RawArtwork {
    id: u64,
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    artist_title: Option<String>,
    #[serde(default)]
    image_id: Option<String>,
    #[serde(default)]
    date_display: Option<String>,
    #[serde(default)]
    medium_display: Option<String>,
    #[serde(default)]
    dimensions: Option<String>,
    #[serde(default)]
    credit_line: Option<String>,
    #[serde(default)]
    department_title: Option<String>,
    #[serde(default)]
    artwork_type_title: Option<String>,
    #[serde(default)]
    is_public_domain: bool,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl From<RawArtwork> for Artwork {
    fn from(raw: RawArtwork) -> Self {
        let or = |value: Option<String>, default: &str| value.unwrap_or_else(|| default.to_string());

        Artwork {
            id: raw.id,
            title: raw.title,
            artist_title: or(raw.artist_title, DEFAULT_ARTIST),
            image_id: raw.image_id,
            date_display: or(raw.date_display, DEFAULT_DATE),
            medium_display: or(raw.medium_display, DEFAULT_MEDIUM),
            dimensions: or(raw.dimensions, DEFAULT_DIMENSIONS),
            credit_line: or(raw.credit_line, ""),
            department_title: or(raw.department_title, ""),
            artwork_type_title: or(raw.artwork_type_title, ""),
            is_public_domain: raw.is_public_domain,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    data: Vec<RawArtwork>,
    pagination: Pagination,
    config: ApiInfo,
}

#[derive(Debug, Deserialize)]
struct RawDetailResponse {
    data: Value,
}

/// Validate a single artwork object
pub fn validate_artwork(value: Value) -> Result<Artwork, ValidationError> {
    let raw: RawArtwork = serde_json::from_value(value)?;
    Ok(raw.into())
}

/// Validate a `/artworks/search` response body
pub fn validate_search_response(value: Value) -> Result<ArtworkPage, ValidationError> {
    let raw: RawSearchResponse = serde_json::from_value(value)?;

    Ok(ArtworkPage {
        artworks: raw.data.into_iter().map(Artwork::from).collect(),
        pagination: raw.pagination,
        info: raw.config,
    })
}

/// Validate a `/artworks/{id}` response body
///
/// Only `data` is checked; the rest of the envelope is ignored.
pub fn validate_detail_response(value: Value) -> Result<Artwork, ValidationError> {
    let raw: RawDetailResponse = serde_json::from_value(value)?;
    validate_artwork(raw.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> Value {
        json!({
            "iiif_url": "https://www.artic.edu/iiif/2",
            "website_url": "http://www.artic.edu"
        })
    }

    fn pagination(total: u64) -> Value {
        json!({
            "total": total,
            "limit": 12,
            "offset": 0,
            "total_pages": 1,
            "current_page": 1
        })
    }

    #[test]
    fn test_full_artwork_passes_through() {
        let artwork = validate_artwork(json!({
            "id": 27992,
            "title": "A Sunday on La Grande Jatte - 1884",
            "artist_title": "Georges Seurat",
            "image_id": "2d484387-2509-5e8e-2c43-22f9981972eb",
            "date_display": "1884–86",
            "medium_display": "Oil on canvas",
            "dimensions": "207.5 × 308.1 cm",
            "credit_line": "Helen Birch Bartlett Memorial Collection",
            "department_title": "Painting and Sculpture of Europe",
            "artwork_type_title": "Painting",
            "is_public_domain": true
        }))
        .unwrap();

        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.artist_title, "Georges Seurat");
        assert_eq!(artwork.image_id.as_deref(), Some("2d484387-2509-5e8e-2c43-22f9981972eb"));
        assert_eq!(artwork.known_date(), Some("1884–86"));
        assert!(artwork.is_public_domain);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let artwork = validate_artwork(json!({ "id": 1 })).unwrap();

        assert_eq!(artwork.title, DEFAULT_TITLE);
        assert_eq!(artwork.artist_title, DEFAULT_ARTIST);
        assert_eq!(artwork.image_id, None);
        assert_eq!(artwork.date_display, DEFAULT_DATE);
        assert_eq!(artwork.medium_display, DEFAULT_MEDIUM);
        assert_eq!(artwork.dimensions, DEFAULT_DIMENSIONS);
        assert_eq!(artwork.credit_line, "");
        assert_eq!(artwork.department_title, "");
        assert_eq!(artwork.artwork_type_title, "");
        assert!(!artwork.is_public_domain);
        assert_eq!(artwork.known_date(), None);
        assert_eq!(artwork.known_medium(), None);
    }

    #[test]
    fn test_null_nullable_fields_get_defaults() {
        let artwork = validate_artwork(json!({
            "id": 2,
            "title": "Water Lilies",
            "artist_title": null,
            "image_id": null,
            "date_display": null,
            "medium_display": null,
            "dimensions": null,
            "credit_line": null,
            "department_title": null,
            "artwork_type_title": null
        }))
        .unwrap();

        assert_eq!(artwork.artist_title, DEFAULT_ARTIST);
        assert_eq!(artwork.image_id, None);
        assert_eq!(artwork.dimensions, DEFAULT_DIMENSIONS);
        assert_eq!(artwork.credit_line, "");
    }

    #[test]
    fn test_wrong_types_fail() {
        assert!(validate_artwork(json!({ "id": "1" })).is_err());
        assert!(validate_artwork(json!({ "id": 1, "artist_title": 5 })).is_err());
        assert!(validate_artwork(json!({ "id": 1, "is_public_domain": "yes" })).is_err());
        assert!(validate_artwork(json!({ "title": "No id" })).is_err());
    }

    #[test]
    fn test_null_title_or_flag_fails() {
        assert!(validate_artwork(json!({ "id": 1, "title": null })).is_err());
        assert!(validate_artwork(json!({ "id": 1, "is_public_domain": null })).is_err());
    }

    #[test]
    fn test_search_response_keeps_order_and_pagination() {
        let page = validate_search_response(json!({
            "data": [
                { "id": 3, "title": "Third" },
                { "id": 1, "title": "First", "image_id": "abc" },
                { "id": 2, "title": "Second" }
            ],
            "pagination": pagination(120),
            "config": config()
        }))
        .unwrap();

        let ids: Vec<u64> = page.artworks.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(page.total(), 120);
        assert_eq!(page.pagination.limit, 12);
        assert_eq!(page.info.iiif_url, "https://www.artic.edu/iiif/2");
    }

    #[test]
    fn test_one_bad_artwork_fails_the_document() {
        let result = validate_search_response(json!({
            "data": [
                { "id": 1, "title": "Fine" },
                { "id": "2", "title": "Broken" }
            ],
            "pagination": pagination(2),
            "config": config()
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_search_response_requires_envelope() {
        assert!(validate_search_response(json!({ "data": [] })).is_err());
        assert!(validate_search_response(json!({
            "data": [],
            "pagination": { "total": 0 },
            "config": config()
        }))
        .is_err());
        assert!(validate_search_response(json!([])).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let page = validate_search_response(json!({
            "preference": null,
            "data": [{ "id": 9, "_score": 141.2, "thumbnail": { "lqip": "..." } }],
            "pagination": pagination(1),
            "config": config(),
            "info": { "version": "1.13" }
        }))
        .unwrap();

        assert_eq!(page.artworks.len(), 1);
    }

    #[test]
    fn test_detail_response() {
        let artwork = validate_detail_response(json!({
            "data": { "id": 111628, "title": "Nighthawks", "artist_title": "Edward Hopper" },
            "config": config()
        }))
        .unwrap();
        assert_eq!(artwork.title, "Nighthawks");

        assert!(validate_detail_response(json!({
            "data": [{ "id": 111628 }],
            "config": config()
        }))
        .is_err());
    }

    #[test]
    fn test_detail_response_without_config() {
        let artwork = validate_detail_response(json!({ "data": { "id": 5 } })).unwrap();
        assert_eq!(artwork.id, 5);
        assert_eq!(artwork.title, DEFAULT_TITLE);

        assert!(validate_detail_response(json!({ "config": config() })).is_err());
    }

    #[test]
    fn test_empty_image_id_passes_through() {
        let artwork = validate_artwork(json!({ "id": 1, "image_id": "" })).unwrap();
        assert_eq!(artwork.image_id.as_deref(), Some(""));
    }
}
