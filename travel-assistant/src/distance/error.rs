//! Distance Matrix API error types.

/// Errors that can occur when interacting with the Distance Matrix API.
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check GOOGLE_MAPS_API_KEY")]
    Unauthorized,

    /// Quota exhausted
    #[error("rate limited by Distance Matrix API")]
    RateLimited,

    /// API returned an error HTTP status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered but refused to process the request
    #[error("request rejected ({status}): {message}")]
    Rejected { status: String, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl From<reqwest::Error> for DistanceError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter.
        DistanceError::Http(err.without_url())
    }
}
