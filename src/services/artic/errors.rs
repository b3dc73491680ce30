//! Error types for the artwork API client

use thiserror::Error;

/// The response body parsed as JSON but did not match the artwork schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Everything that can go wrong fetching from the artwork API
///
/// Callers only ever show the `Display` text; the variants exist so logs and
/// tests can tell a transport failure apart from a bad payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API request failed with status {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// The body was not JSON
    #[error("Response was not valid JSON: {0}")]
    Json(String),

    /// The body was JSON of the wrong shape
    #[error("Invalid data received from API. Data does not match expected schema.")]
    Validation(ValidationError),

    /// One of the above, tagged with the client operation that hit it
    #[error("Failed to {operation}: {source}")]
    Operation {
        operation: &'static str,
        source: Box<ApiError>,
    },
}

impl ApiError {
    /// Tag this error with the operation that failed, e.g. "search artworks"
    pub fn during(self, operation: &'static str) -> Self {
        ApiError::Operation {
            operation,
            source: Box::new(self),
        }
    }

    pub fn is_validation(&self) -> bool {
        match self {
            ApiError::Validation(_) => true,
            ApiError::Operation { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}
