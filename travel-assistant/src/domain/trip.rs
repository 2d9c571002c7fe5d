//! Trip parameters extracted from a user query.

use std::fmt;

use super::mode::{TravelMode, UnknownMode};

/// One extracted trip parameter.
///
/// `Missing` means the extraction step saw the field but the user's text
/// did not supply a value. It is not a structural error; see
/// [`crate::parser::MalformedExtraction`] for those.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TripField {
    Value(String),
    Missing,
}

impl TripField {
    /// The value, if present.
    pub fn value(&self) -> Option<&str> {
        match self {
            TripField::Value(v) => Some(v),
            TripField::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, TripField::Missing)
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripField::Value(v) => f.write_str(v),
            TripField::Missing => f.write_str("(not given)"),
        }
    }
}

/// Origin, destination and mode as extracted from one query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripQuery {
    pub origin: TripField,
    pub destination: TripField,
    pub mode: TripField,
}

impl TripQuery {
    /// Create a trip where every field is present.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            origin: TripField::Value(origin.into()),
            destination: TripField::Value(destination.into()),
            mode: TripField::Value(mode.into()),
        }
    }

    /// Validate the mode field against the supported modes.
    ///
    /// Returns `Ok(None)` when the mode is missing, so callers can tell a
    /// missing mode apart from an unsupported one.
    pub fn travel_mode(&self) -> Result<Option<TravelMode>, UnknownMode> {
        self.mode.value().map(TravelMode::parse).transpose()
    }
}

/// Result of the extraction stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// The query is not about travel duration.
    OutOfContext,
    /// The query names (some of) a trip.
    Trip(TripQuery),
}
