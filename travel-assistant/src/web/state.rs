//! Application state for the web layer.

use std::sync::Arc;

use crate::assistant::Assistant;
use crate::distance::DistanceMatrixClient;
use crate::llm::OpenAiClient;

/// The assistant wired to the real upstream services.
pub type LiveAssistant = Assistant<OpenAiClient, DistanceMatrixClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Query pipeline, shared by every request
    pub assistant: Arc<LiveAssistant>,
}

impl AppState {
    pub fn new(assistant: LiveAssistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }
}
