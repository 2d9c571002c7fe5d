//! Turning an extracted trip into a duration or a list of reasons why not.
//!
//! Validation always runs in the same order (destination, origin, mode) so
//! the error list, and therefore the synthesized message, is deterministic.

use tracing::{debug, warn};

use crate::domain::{ResolutionError, ResolutionOutcome, TravelMode, TripQuery};

use super::client::DurationProvider;
use super::types::DistanceMatrixResponse;

/// Resolve the travel duration for `trip`.
///
/// Makes at most one call to `provider`, and none when a location is
/// missing. Never fails: transport problems become a single
/// [`ResolutionError::Transport`].
pub async fn resolve<P: DurationProvider>(provider: &P, trip: &TripQuery) -> ResolutionOutcome {
    let mode = checked_mode(trip);

    let (Some(origin), Some(destination)) = (trip.origin.value(), trip.destination.value()) else {
        debug!("skipping lookup, trip is missing a location");
        return ResolutionOutcome::failure(field_errors(trip, mode.err()));
    };

    // An unusable mode is still reported, but the addresses get checked too.
    let lookup_mode = mode.as_ref().copied().unwrap_or_default();

    match provider.lookup(origin, destination, lookup_mode).await {
        Ok(response) => evaluate(&response, mode.err()),
        Err(e) => {
            warn!(error = %e, "distance lookup failed");
            ResolutionOutcome::Failure {
                errors: vec![ResolutionError::Transport],
            }
        }
    }
}

/// Validate a matrix response.
///
/// Success requires a duration *and* no validation errors; a duration
/// computed for a trip with an unusable mode is not reported.
pub fn evaluate(
    response: &DistanceMatrixResponse,
    mode_error: Option<ResolutionError>,
) -> ResolutionOutcome {
    let mut errors = Vec::new();

    if !response.destination_resolved() {
        errors.push(ResolutionError::InvalidDestination);
    }
    if !response.origin_resolved() {
        errors.push(ResolutionError::InvalidOrigin);
    }
    if let Some(e) = mode_error {
        errors.push(e);
    }

    match response.duration_text() {
        Some(duration) if errors.is_empty() => ResolutionOutcome::Success {
            duration: duration.to_string(),
        },
        _ => ResolutionOutcome::failure(errors),
    }
}

/// Errors derivable from the extracted fields alone.
fn field_errors(trip: &TripQuery, mode_error: Option<ResolutionError>) -> Vec<ResolutionError> {
    let mut errors = Vec::new();

    if trip.destination.is_missing() {
        errors.push(ResolutionError::InvalidDestination);
    }
    if trip.origin.is_missing() {
        errors.push(ResolutionError::InvalidOrigin);
    }
    if let Some(e) = mode_error {
        errors.push(e);
    }

    errors
}

fn checked_mode(trip: &TripQuery) -> Result<TravelMode, ResolutionError> {
    match trip.travel_mode() {
        Ok(Some(mode)) => Ok(mode),
        Ok(None) => Err(ResolutionError::InvalidMode(None)),
        Err(unknown) => Err(ResolutionError::InvalidMode(Some(unknown.input().to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceError;
    use crate::domain::TripField;
    use crate::testing::{FakeDurationProvider, matrix};

    #[tokio::test]
    async fn resolvable_trip_succeeds() {
        let provider = FakeDurationProvider::returning(matrix::resolved("4 hours"));
        let trip = TripQuery::new("Boston", "New York", "driving");

        let outcome = resolve(&provider, &trip).await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Success {
                duration: "4 hours".into()
            }
        );
        assert_eq!(
            provider.calls(),
            vec![("Boston".to_string(), "New York".to_string(), TravelMode::Driving)]
        );
    }

    #[tokio::test]
    async fn synonym_mode_is_normalized_for_lookup() {
        let provider = FakeDurationProvider::returning(matrix::resolved("55 mins"));
        let trip = TripQuery::new("Oxford", "London", "train");

        resolve(&provider, &trip).await;

        assert_eq!(provider.calls()[0].2, TravelMode::Transit);
    }

    #[tokio::test]
    async fn unresolved_addresses_report_destination_then_origin() {
        let provider = FakeDurationProvider::returning(matrix::unresolved());
        let trip = TripQuery::new("Atlantis", "nowhere", "driving");

        let outcome = resolve(&provider, &trip).await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Failure {
                errors: vec![
                    ResolutionError::InvalidDestination,
                    ResolutionError::InvalidOrigin
                ]
            }
        );
    }

    #[tokio::test]
    async fn missing_mode_suppresses_success() {
        let provider = FakeDurationProvider::returning(matrix::resolved("4 hours"));
        let trip = TripQuery {
            mode: TripField::Missing,
            ..TripQuery::new("Boston", "New York", "")
        };

        let outcome = resolve(&provider, &trip).await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Failure {
                errors: vec![ResolutionError::InvalidMode(None)]
            }
        );
        // The addresses were still looked up, with the default mode.
        assert_eq!(provider.calls()[0].2, TravelMode::Driving);
    }

    #[tokio::test]
    async fn unknown_mode_is_reported_by_name() {
        let provider = FakeDurationProvider::returning(matrix::resolved("4 hours"));
        let trip = TripQuery::new("Boston", "New York", "teleport");

        let outcome = resolve(&provider, &trip).await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Failure {
                errors: vec![ResolutionError::InvalidMode(Some("teleport".into()))]
            }
        );
    }

    #[tokio::test]
    async fn missing_locations_skip_the_lookup() {
        let provider = FakeDurationProvider::returning(matrix::resolved("4 hours"));
        let trip = TripQuery {
            origin: TripField::Missing,
            destination: TripField::Missing,
            mode: TripField::Missing,
        };

        let outcome = resolve(&provider, &trip).await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Failure {
                errors: vec![
                    ResolutionError::InvalidDestination,
                    ResolutionError::InvalidOrigin,
                    ResolutionError::InvalidMode(None),
                ]
            }
        );
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn resolved_addresses_without_route_are_no_route() {
        let provider = FakeDurationProvider::returning(matrix::no_route());
        let trip = TripQuery::new("Boston", "Honolulu", "driving");

        let outcome = resolve(&provider, &trip).await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Failure {
                errors: vec![ResolutionError::NoRouteFound]
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_is_a_single_error() {
        let provider = FakeDurationProvider::failing(|| DistanceError::RateLimited);
        let trip = TripQuery::new("Boston", "New York", "driving");

        let outcome = resolve(&provider, &trip).await;

        assert_eq!(
            outcome,
            ResolutionOutcome::Failure {
                errors: vec![ResolutionError::Transport]
            }
        );
    }

    #[test]
    fn evaluate_requires_ok_top_level_status() {
        let mut response = matrix::resolved("4 hours");
        response.status = crate::distance::MatrixStatus::MaxElementsExceeded;

        assert_eq!(
            evaluate(&response, None),
            ResolutionOutcome::Failure {
                errors: vec![ResolutionError::NoRouteFound]
            }
        );
    }
}
