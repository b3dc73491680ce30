//! Art Institute of Chicago API client
//!
//! Thin wrapper over the public REST API at `api.artic.edu`. Every call is a
//! single GET; the body is validated against the artwork schema before it
//! reaches the UI.

pub mod errors;
pub mod schema;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

pub use errors::{ApiError, ValidationError};
pub use schema::{Artwork, ArtworkPage};

/// Art Institute API base URL
pub const ARTIC_API_BASE: &str = "https://api.artic.edu/api/v1";

/// IIIF image server base URL
pub const IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

/// Fields requested for every artwork, keeps payloads small
pub const ARTWORK_FIELDS: &str = "id,title,artist_title,image_id,date_display,medium_display,dimensions,credit_line,department_title,artwork_type_title,is_public_domain";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 12;

/// Image width used on result cards
pub const DEFAULT_IMAGE_SIZE: u32 = 843;

/// Image width used on the detail page
pub const DETAIL_IMAGE_SIZE: u32 = 1686;

/// Restricts a search to public-domain works (Elasticsearch term query)
const PUBLIC_DOMAIN_FILTER: &str = "query[term][is_public_domain]=true";

/// Build the IIIF URL for an image id at the given pixel width
///
/// Returns `None` when the artwork has no image (missing or empty id).
pub fn get_image_url(image_id: Option<&str>, size: u32) -> Option<String> {
    image_id.filter(|id| !id.is_empty()).map(|id| format!("{}/{}/full/{},/0/default.jpg", IIIF_BASE, id, size))
}

/// Parameters for one page of search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkQuery {
    pub text: String,
    pub page: u32,
    pub limit: u32,
    pub public_domain_only: bool,
}

impl ArtworkQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            public_domain_only: false,
        }
    }

    pub fn public_domain_only(mut self, enabled: bool) -> Self {
        self.public_domain_only = enabled;
        self
    }
}

/// Operation name used to tag errors from a search
pub fn search_operation(query: &ArtworkQuery) -> &'static str {
    if query.public_domain_only {
        "search public domain artworks"
    } else {
        "search artworks"
    }
}

/// URL for `/artworks/search`
pub fn search_url(base_url: &str, query: &ArtworkQuery) -> String {
    let filter = if query.public_domain_only {
        format!("&{}", PUBLIC_DOMAIN_FILTER)
    } else {
        String::new()
    };

    format!(
        "{}/artworks/search?q={}{}&page={}&limit={}&fields={}",
        base_url,
        urlencoding::encode(&query.text),
        filter,
        query.page,
        query.limit,
        ARTWORK_FIELDS
    )
}

/// URL for `/artworks/{id}`
pub fn artwork_url(base_url: &str, id: u64) -> String {
    format!("{}/artworks/{}?fields={}", base_url, id, ARTWORK_FIELDS)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a raw HTTP response into a validated value
///
/// Status is checked first, then JSON syntax, then the schema.
pub fn decode_response<T>(
    status: u16,
    status_text: &str,
    body: &str,
    validate: fn(Value) -> Result<T, ValidationError>,
) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status {
            status,
            status_text: status_text.to_string(),
        });
    }

    let json: Value = serde_json::from_str(body).map_err(|e| ApiError::Json(e.to_string()))?;

    validate(json).map_err(|e| {
        log::warn!("Validation errors: {}", e);
        ApiError::from(e)
    })
}

/// Where artworks come from
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ArtworkSource {
    /// Fetch one page of results for `query`
    async fn search(&self, query: &ArtworkQuery) -> Result<ArtworkPage, ApiError>;

    /// Fetch one artwork by id
    async fn artwork(&self, id: u64) -> Result<Artwork, ApiError>;
}

/// Art Institute API client
#[derive(Debug, Clone)]
pub struct ArticApi {
    base_url: String,
}

impl ArticApi {
    pub fn new() -> Self {
        Self::with_base_url(ARTIC_API_BASE)
    }

    /// Point the client at another deployment of the same API
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the whole collection
    pub async fn search_artworks(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<ArtworkPage, ApiError> {
        let query = ArtworkQuery {
            text: query.to_string(),
            page,
            limit,
            public_domain_only: false,
        };
        self.fetch_page(&query).await
    }

    /// Search only public-domain works
    pub async fn search_public_domain_artworks(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<ArtworkPage, ApiError> {
        let query = ArtworkQuery {
            text: query.to_string(),
            page,
            limit,
            public_domain_only: true,
        };
        self.fetch_page(&query).await
    }

    /// Fetch a single artwork
    pub async fn get_artwork_by_id(&self, id: u64) -> Result<Artwork, ApiError> {
        let url = artwork_url(self.base_url(), id);
        self.fetch(&url, schema::validate_detail_response)
            .await
            .map_err(|e| e.during("fetch artwork"))
    }

    async fn fetch_page(&self, query: &ArtworkQuery) -> Result<ArtworkPage, ApiError> {
        let url = search_url(self.base_url(), query);
        let page = self
            .fetch(&url, schema::validate_search_response)
            .await
            .map_err(|e| e.during(search_operation(query)))?;

        log::info!(
            "Search \"{}\" returned {} of {} artworks",
            query.text,
            page.artworks.len(),
            page.total()
        );
        log::debug!("Images served from {}", page.info.iiif_url);
        Ok(page)
    }

    async fn fetch<T>(
        &self,
        url: &str,
        validate: fn(Value) -> Result<T, ValidationError>,
    ) -> Result<T, ApiError> {
        log::info!("Requesting {}", url);

        let response = Request::get(url).send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let status_text = response.status_text();

        if !is_success(status) {
            log::error!("{} answered {} {}", url, status, status_text);
        }

        let body = if is_success(status) {
            response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?
        } else {
            String::new()
        };

        decode_response(status, &status_text, &body, validate)
    }
}

impl Default for ArticApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ArtworkSource for ArticApi {
    async fn search(&self, query: &ArtworkQuery) -> Result<ArtworkPage, ApiError> {
        if query.public_domain_only {
            self.search_public_domain_artworks(&query.text, query.page, query.limit)
                .await
        } else {
            self.search_artworks(&query.text, query.page, query.limit)
                .await
        }
    }

    async fn artwork(&self, id: u64) -> Result<Artwork, ApiError> {
        self.get_artwork_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_url() {
        assert_eq!(get_image_url(None, DEFAULT_IMAGE_SIZE), None);
        assert_eq!(
            get_image_url(Some("abc123"), 843).as_deref(),
            Some("https://www.artic.edu/iiif/2/abc123/full/843,/0/default.jpg")
        );
        assert_eq!(
            get_image_url(Some("abc123"), 200).as_deref(),
            Some("https://www.artic.edu/iiif/2/abc123/full/200,/0/default.jpg")
        );
    }

    #[test]
    fn test_empty_image_id_has_no_url() {
        assert_eq!(get_image_url(Some(""), DEFAULT_IMAGE_SIZE), None);

        let artwork = schema::validate_artwork(json!({ "id": 1, "image_id": "" })).unwrap();
        assert_eq!(get_image_url(artwork.image_id.as_deref(), 843), None);
    }

    #[test]
    fn test_search_url_defaults() {
        let url = search_url(ARTIC_API_BASE, &ArtworkQuery::new("monet"));
        assert_eq!(
            url,
            format!(
                "https://api.artic.edu/api/v1/artworks/search?q=monet&page=1&limit=12&fields={}",
                ARTWORK_FIELDS
            )
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url(ARTIC_API_BASE, &ArtworkQuery::new("van gogh & co"));
        assert!(url.contains("q=van%20gogh%20%26%20co&page=1"));
    }

    #[test]
    fn test_search_url_public_domain_filter() {
        let query = ArtworkQuery {
            text: "sculpture".to_string(),
            page: 3,
            limit: 24,
            public_domain_only: true,
        };
        let url = search_url(ARTIC_API_BASE, &query);
        assert!(url.contains("q=sculpture&query[term][is_public_domain]=true&page=3&limit=24&fields="));

        let plain = search_url(ARTIC_API_BASE, &ArtworkQuery::new("sculpture"));
        assert!(!plain.contains("is_public_domain]"));
    }

    #[test]
    fn test_search_operation_names() {
        let query = ArtworkQuery::new("monet");
        assert_eq!(search_operation(&query), "search artworks");
        assert_eq!(
            search_operation(&query.public_domain_only(true)),
            "search public domain artworks"
        );
    }

    #[test]
    fn test_artwork_url() {
        assert_eq!(
            artwork_url(ARTIC_API_BASE, 27992),
            format!("https://api.artic.edu/api/v1/artworks/27992?fields={}", ARTWORK_FIELDS)
        );
    }

    #[test]
    fn test_custom_base_url_is_trimmed() {
        let api = ArticApi::with_base_url("http://localhost:8080/api/v1/");
        assert_eq!(api.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(ArticApi::default().base_url(), ARTIC_API_BASE);
    }

    #[test]
    fn test_decode_status_failure() {
        let err = decode_response(500, "Internal Server Error", "", schema::validate_search_response)
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn test_decode_bad_json() {
        let err = decode_response(200, "OK", "<html>oops</html>", schema::validate_search_response)
            .unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[test]
    fn test_decode_schema_failure() {
        let body = json!({
            "data": [{ "id": "not-a-number" }],
            "pagination": { "total": 1, "limit": 12, "offset": 0, "total_pages": 1, "current_page": 1 },
            "config": { "iiif_url": "https://www.artic.edu/iiif/2", "website_url": "http://www.artic.edu" }
        })
        .to_string();

        let err = decode_response(200, "OK", &body, schema::validate_search_response).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_decode_success() {
        let body = json!({
            "data": { "id": 16568, "title": "Water Lilies", "artist_title": "Claude Monet", "image_id": "3c27b499" },
            "config": { "iiif_url": "https://www.artic.edu/iiif/2", "website_url": "http://www.artic.edu" }
        })
        .to_string();

        let artwork = decode_response(200, "OK", &body, schema::validate_detail_response).unwrap();
        assert_eq!(artwork.id, 16568);
        assert_eq!(artwork.artist_title, "Claude Monet");
    }
}
