//! Natural-language travel duration assistant.
//!
//! An [`Assistant`] answers a free-text question in three steps: a language
//! model extracts origin, destination and mode; the distance matrix service
//! resolves the duration; the language model phrases the result, or the
//! reasons there is none.

mod error;
mod extract;
mod pipeline;
pub(crate) mod prompts;
mod synthesize;

pub use error::{
    AssistantError, EXTRACTION_FALLBACK_REPLY, OUT_OF_CONTEXT_REPLY, SYNTHESIS_FALLBACK_REPLY,
};
pub use extract::extract;
pub use pipeline::{AnswerKind, Assistant, FinalAnswer};
pub use synthesize::{synthesize_error, synthesize_success};
