//! Pipeline error types.
//!
//! None of these reach the caller: the pipeline answers every query with
//! text, and these errors decide which fixed text.

use crate::llm::LlmError;
use crate::parser::MalformedExtraction;

/// Answer for queries unrelated to travel duration.
pub const OUT_OF_CONTEXT_REPLY: &str = "I'm sorry, I did not understand your question. \
Please input a query related to travel duration calculation.";

/// Answer when the trip details could not be extracted.
pub const EXTRACTION_FALLBACK_REPLY: &str = "I'm sorry, I couldn't work out the trip details \
from your question. Please try rephrasing it.";

/// Answer when the final phrasing step fails.
pub const SYNTHESIS_FALLBACK_REPLY: &str = "I'm sorry, something went wrong while preparing \
your answer. Please try again later.";

/// A stage of the pipeline failed.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The extraction request itself failed
    #[error("extraction request failed: {0}")]
    Extraction(#[source] LlmError),

    /// The extraction reply did not have the expected shape
    #[error("malformed extraction: {0}")]
    Malformed(#[from] MalformedExtraction),

    /// The phrasing request failed
    #[error("synthesis request failed: {0}")]
    Synthesis(#[source] LlmError),
}

impl AssistantError {
    /// The fixed text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            AssistantError::Extraction(_) | AssistantError::Malformed(_) => {
                EXTRACTION_FALLBACK_REPLY
            }
            AssistantError::Synthesis(_) => SYNTHESIS_FALLBACK_REPLY,
        }
    }
}
