//! Travel mode types.

use std::fmt;

/// Error returned when a mode of travel is not one the distance service supports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported travel mode: {input:?}")]
pub struct UnknownMode {
    input: String,
}

impl UnknownMode {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A mode of travel understood by the distance-matrix service.
///
/// Extraction yields free text ("car", "on foot", "Driving"); this type is
/// the allow-list that text is normalized onto.
///
/// # Examples
///
/// ```
/// use travel_assistant::domain::TravelMode;
///
/// assert_eq!(TravelMode::parse("Driving").unwrap(), TravelMode::Driving);
/// assert_eq!(TravelMode::parse("by car").unwrap(), TravelMode::Driving);
/// assert_eq!(TravelMode::parse("public transport").unwrap(), TravelMode::Transit);
///
/// assert!(TravelMode::parse("teleport").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// All supported modes, in the order they are listed to users.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Driving,
        TravelMode::Walking,
        TravelMode::Bicycling,
        TravelMode::Transit,
    ];

    /// Parse a mode from model output, accepting common synonyms.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, UnknownMode> {
        let normalized = s.trim().to_lowercase();

        let mode = match normalized.as_str() {
            "driving" | "drive" | "car" | "by car" | "auto" | "automobile" => TravelMode::Driving,
            "walking" | "walk" | "on foot" | "foot" | "by foot" => TravelMode::Walking,
            "bicycling" | "bicycle" | "bike" | "biking" | "cycling" | "cycle" | "by bike" => {
                TravelMode::Bicycling
            }
            "transit" | "public transport" | "public transportation" | "public transit"
            | "train" | "bus" | "subway" | "metro" | "rail" | "tram" => TravelMode::Transit,
            _ => {
                return Err(UnknownMode {
                    input: s.trim().to_string(),
                });
            }
        };

        Ok(mode)
    }

    /// The value sent as the `mode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
