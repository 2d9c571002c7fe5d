//! Prompt templates for the three language-model calls.

use crate::domain::{ResolutionError, TripQuery};
use crate::parser::{MISSING_PLACEHOLDER, OUT_OF_CONTEXT};

pub const EXTRACTION_SYSTEM: &str = "You are an assistant that processes user queries about \
current travel duration between two locations for a given mode of transportation.";

pub const SUCCESS_SYSTEM: &str = "You are an assistant that combines given four inputs into a \
short, clear, to the point natural language output.";

pub const ERROR_SYSTEM: &str = "You are an assistant that lets the user know about invalid inputs.";

/// User prompt asking for origin, destination and mode as three lines.
pub fn extraction_user(query: &str) -> String {
    format!(
        "Extract origin location, destination location and mode of travel from this query: \
         {query}. Return {MISSING_PLACEHOLDER} for missing values. \
         If the query is unrelated to travel duration, return '{OUT_OF_CONTEXT}'.\n\
         Otherwise answer with exactly three lines:\n\
         Origin: <origin>\n\
         Destination: <destination>\n\
         Mode: <mode of travel>"
    )
}

/// User prompt combining a resolved trip and its duration into one sentence.
pub fn success_user(trip: &TripQuery, duration: &str) -> String {
    format!(
        "Combine following information into a response: Origin location: {}, \
         destination location: {}, travel mode: {} and duration: {duration}.",
        trip.origin, trip.destination, trip.mode
    )
}

/// User prompt consolidating validation errors into one message.
pub fn error_user(errors: &[ResolutionError]) -> String {
    let list: String = errors.iter().map(|e| format!("\n- {e}")).collect();
    format!("Combine the given error messages into a clear and concise error message:{list}")
}
