//! Distance Matrix API response DTOs.
//!
//! These types map directly to the Distance Matrix JSON API. Arrays the
//! service omits default to empty, so an unexpected shape degrades to
//! "unresolved" rather than a parse failure.

use serde::Deserialize;

/// Top-level request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatrixStatus {
    Ok,
    InvalidRequest,
    MaxElementsExceeded,
    MaxDimensionsExceeded,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    #[serde(other)]
    Other,
}

/// Status of one origin-destination pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementStatus {
    Ok,
    /// Origin or destination could not be geocoded.
    NotFound,
    /// No route between the two for this mode.
    ZeroResults,
    MaxRouteLengthExceeded,
    #[serde(other)]
    Other,
}

/// Response from the Distance Matrix endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: MatrixStatus,

    /// Resolved origin addresses; an empty string means "not found".
    #[serde(default)]
    pub origin_addresses: Vec<String>,

    /// Resolved destination addresses; an empty string means "not found".
    #[serde(default)]
    pub destination_addresses: Vec<String>,

    /// One row per origin.
    #[serde(default)]
    pub rows: Vec<MatrixRow>,

    /// Present on most non-OK statuses.
    pub error_message: Option<String>,
}

/// Row of elements for one origin.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// Result for one origin-destination pairing.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    pub status: ElementStatus,
    pub duration: Option<TextValue>,
    pub distance: Option<TextValue>,
}

/// A quantity with its human-readable rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// E.g. "4 hours 5 mins".
    pub text: String,
    /// Seconds for durations, metres for distances.
    pub value: u64,
}

impl DistanceMatrixResponse {
    /// Whether the first origin resolved to a non-empty address.
    pub fn origin_resolved(&self) -> bool {
        first_non_blank(&self.origin_addresses).is_some()
    }

    /// Whether the first destination resolved to a non-empty address.
    pub fn destination_resolved(&self) -> bool {
        first_non_blank(&self.destination_addresses).is_some()
    }

    /// The first origin-destination element, if the response has one.
    pub fn first_element(&self) -> Option<&MatrixElement> {
        self.rows.first().and_then(|row| row.elements.first())
    }

    /// Human-readable duration, when both the request and the first
    /// pairing succeeded.
    pub fn duration_text(&self) -> Option<&str> {
        if self.status != MatrixStatus::Ok {
            return None;
        }
        let element = self.first_element()?;
        if element.status != ElementStatus::Ok {
            return None;
        }
        element.duration.as_ref().map(|d| d.text.as_str())
    }
}

fn first_non_blank(addresses: &[String]) -> Option<&str> {
    addresses
        .first()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
}
