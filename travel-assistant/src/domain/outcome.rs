//! Duration lookup outcomes.

use std::fmt;

/// One reason a duration could not be produced.
///
/// The `Display` text is what the error-synthesis prompt sees, so it is
/// written for end users and never carries provider detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// Destination missing or did not resolve to an address.
    #[error("Please provide a valid destination address.")]
    InvalidDestination,

    /// Origin missing or did not resolve to an address.
    #[error("Please provide a valid starting address.")]
    InvalidOrigin,

    /// Mode missing (`None`) or not one of the supported modes (`Some`).
    #[error("{}", invalid_mode_message(.0.as_deref()))]
    InvalidMode(Option<String>),

    /// Both addresses resolved but no route exists for the mode.
    #[error("Could not compute a travel duration for the given inputs.")]
    NoRouteFound,

    /// The duration service could not be reached or rejected the request.
    #[error("The travel duration service is unavailable right now.")]
    Transport,
}

fn invalid_mode_message(mode: Option<&str>) -> String {
    match mode {
        None => "Please provide a valid mode of transportation.".to_string(),
        Some(m) => format!(
            "\"{m}\" is not a supported mode of transportation (driving, walking, bicycling or transit)."
        ),
    }
}

/// Result of resolving a trip's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Human-readable duration, e.g. "4 hours 5 mins".
    Success { duration: String },

    /// Ordered, non-empty list of reasons.
    Failure { errors: Vec<ResolutionError> },
}

impl ResolutionOutcome {
    /// Build a failure, substituting `NoRouteFound` for an empty list.
    pub fn failure(mut errors: Vec<ResolutionError>) -> Self {
        if errors.is_empty() {
            errors.push(ResolutionError::NoRouteFound);
        }
        ResolutionOutcome::Failure { errors }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResolutionOutcome::Success { .. })
    }
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionOutcome::Success { duration } => write!(f, "duration {duration}"),
            ResolutionOutcome::Failure { errors } => {
                write!(f, "{} error(s)", errors.len())
            }
        }
    }
}
