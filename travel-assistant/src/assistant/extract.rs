//! Extraction of trip parameters from a free-text query.

use crate::llm::{ChatModel, LlmError};

use super::prompts;

/// Ask the model for origin, destination and mode.
///
/// Returns the completion trimmed of surrounding whitespace. Structure is
/// not checked here; see [`crate::parser::parse`].
pub async fn extract<L: ChatModel>(model: &L, query: &str) -> Result<String, LlmError> {
    let reply = model
        .complete(prompts::EXTRACTION_SYSTEM, &prompts::extraction_user(query))
        .await?;

    Ok(reply.trim().to_string())
}
