//! Distance Matrix API client.

use std::fmt;
use std::future::Future;

use tracing::debug;

use crate::domain::TravelMode;

use super::error::DistanceError;
use super::types::{DistanceMatrixResponse, MatrixStatus};

/// Default endpoint for the Distance Matrix API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// A source of travel durations between two places.
///
/// This abstraction allows the resolver to be tested with canned responses.
pub trait DurationProvider: Send + Sync {
    /// Look up the matrix for a single origin-destination pair.
    ///
    /// Returns the parsed response for any answer the service gives about
    /// the places themselves; transport failures and refusals are errors.
    fn lookup(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> impl Future<Output = Result<DistanceMatrixResponse, DistanceError>> + Send;
}

/// Configuration for the Distance Matrix client.
#[derive(Clone)]
pub struct DistanceMatrixConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Full endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DistanceMatrixConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl fmt::Debug for DistanceMatrixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceMatrixConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Client for the Distance Matrix API.
#[derive(Clone)]
pub struct DistanceMatrixClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for DistanceMatrixClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceMatrixClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DistanceMatrixClient {
    /// Create a new Distance Matrix client.
    pub fn new(config: DistanceMatrixConfig) -> Result<Self, DistanceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }
}

impl DurationProvider for DistanceMatrixClient {
    async fn lookup(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<DistanceMatrixResponse, DistanceError> {
        debug!(origin, destination, %mode, "requesting distance matrix");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("mode", mode.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DistanceError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DistanceError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DistanceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let matrix: DistanceMatrixResponse =
            serde_json::from_str(&body).map_err(|e| DistanceError::Json {
                message: e.to_string(),
            })?;

        // The service reports key and quota problems in-band with HTTP 200.
        match matrix.status {
            MatrixStatus::RequestDenied => Err(DistanceError::Rejected {
                status: "REQUEST_DENIED".to_string(),
                message: matrix.error_message.unwrap_or_default(),
            }),
            MatrixStatus::OverQueryLimit | MatrixStatus::OverDailyLimit => {
                Err(DistanceError::RateLimited)
            }
            MatrixStatus::UnknownError => Err(DistanceError::Rejected {
                status: "UNKNOWN_ERROR".to_string(),
                message: matrix.error_message.unwrap_or_default(),
            }),
            _ => Ok(matrix),
        }
    }
}
