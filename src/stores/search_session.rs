//! Search page state
//!
//! One explicit struct holds everything the search page knows. The page owns
//! it in a signal and only mutates it through `begin` and `complete`, so the
//! four render states can be derived without any other bookkeeping.
//!
//! Requests are not tagged: if two searches overlap, whichever response
//! completes last overwrites the other.

use crate::services::artic::{ApiError, Artwork, ArtworkPage, ArtworkQuery, ArtworkSource};

/// Shown when an error carries no text of its own
pub const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Quick searches offered before the first search
pub const SUGGESTIONS: [(&str, &str); 4] = [
    ("monet", "Monet"),
    ("impressionism", "Impressionism"),
    ("van gogh", "Van Gogh"),
    ("sculpture", "Sculpture"),
];

/// What the search page should render
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView<'a> {
    /// Nothing searched yet
    Empty,
    Loading,
    Error(&'a str),
    Results(&'a [Artwork]),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    pub query: String,
    pub artworks: Vec<Artwork>,
    pub total: u64,
    pub is_loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
    pub public_domain_only: bool,
}

/// A search that has been started but not yet sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: ArtworkQuery,
}

impl SearchRequest {
    /// Issue exactly one request against `source`
    pub async fn execute<S: ArtworkSource + ?Sized>(&self, source: &S) -> Result<ArtworkPage, ApiError> {
        source.search(&self.query).await
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_public_domain_only(&mut self, enabled: bool) {
        self.public_domain_only = enabled;
    }

    /// Enter the loading state for `query`
    pub fn begin(&mut self, query: &str) -> SearchRequest {
        self.is_loading = true;
        self.error = None;
        self.query = query.to_string();
        self.has_searched = true;

        SearchRequest {
            query: ArtworkQuery::new(query).public_domain_only(self.public_domain_only),
        }
    }

    /// Record the outcome of the search for `query`
    pub fn complete(&mut self, query: &str, outcome: Result<ArtworkPage, ApiError>) {
        match outcome {
            Ok(page) => {
                self.total = page.total();
                self.artworks = page.artworks;

                if self.artworks.is_empty() {
                    self.error = Some(format!(
                        "No artworks found for \"{}\". Try a different search term.",
                        query
                    ));
                }
            }
            Err(e) => {
                if e.is_validation() {
                    log::warn!("Search for \"{}\" returned unexpected data", query);
                } else {
                    log::error!("Search for \"{}\" failed: {}", query, e);
                }
                self.error = Some(failure_message(&e.to_string()));
                self.artworks.clear();
                self.total = 0;
            }
        }

        self.is_loading = false;
    }

    /// Select the render state; earlier checks win
    pub fn view(&self) -> SearchView<'_> {
        if !self.has_searched {
            return SearchView::Empty;
        }
        if self.is_loading {
            return SearchView::Loading;
        }
        if let Some(error) = &self.error {
            return SearchView::Error(error);
        }
        if !self.artworks.is_empty() {
            return SearchView::Results(&self.artworks);
        }
        SearchView::Empty
    }
}

fn failure_message(detail: &str) -> String {
    if detail.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        format!("Search failed: {}", detail)
    }
}
