//! Domain types for the travel duration assistant.
//!
//! These types replace the string sentinels a language model speaks in
//! (`OutOfContext`, `None`) with tagged values, so a place that happens to
//! share a name with a sentinel can never be mistaken for one.

mod mode;
mod outcome;
mod trip;

pub use mode::{TravelMode, UnknownMode};
pub use outcome::{ResolutionError, ResolutionOutcome};
pub use trip::{ExtractionResult, TripField, TripQuery};
