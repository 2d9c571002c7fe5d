//! Phrasing of the final answer.
//!
//! Completion text is returned exactly as the model produced it.

use crate::domain::{ResolutionError, TripQuery};
use crate::llm::{ChatModel, LlmError};

use super::prompts;

/// One sentence combining the trip and its duration.
pub async fn synthesize_success<L: ChatModel>(
    model: &L,
    trip: &TripQuery,
    duration: &str,
) -> Result<String, LlmError> {
    model
        .complete(prompts::SUCCESS_SYSTEM, &prompts::success_user(trip, duration))
        .await
}

/// One message consolidating every reason the trip could not be resolved.
pub async fn synthesize_error<L: ChatModel>(
    model: &L,
    errors: &[ResolutionError],
) -> Result<String, LlmError> {
    model
        .complete(prompts::ERROR_SYSTEM, &prompts::error_user(errors))
        .await
}
