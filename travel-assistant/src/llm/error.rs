//! Chat-completion client error types.

/// Maximum number of characters of an unparseable body kept for logging.
pub(crate) const EXCERPT_CHARS: usize = 200;

/// Errors from the chat-completion client.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Connection, timeout or body read failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The key was refused
    #[error("unauthorized: check OPENAI_API_KEY")]
    Unauthorized,

    #[error("rate limited by completion API")]
    RateLimited,

    /// Any other non-2xx status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The body was not a chat-completion response
    #[error("unreadable completion response: {message}")]
    Malformed { message: String, excerpt: String },

    /// The response parsed but had no message text
    #[error("completion contained no message text")]
    EmptyCompletion,

    /// The client could not be built from its configuration
    #[error("client not configured: {0}")]
    NotConfigured(String),
}

impl LlmError {
    /// Build a [`LlmError::Malformed`] keeping the start of the offending body.
    pub(crate) fn malformed(err: serde_json::Error, body: &str) -> Self {
        LlmError::Malformed {
            message: err.to_string(),
            excerpt: body.chars().take(EXCERPT_CHARS).collect(),
        }
    }
}
