//! Language-model client.
//!
//! This module provides an HTTP client for an OpenAI-compatible
//! chat-completion API, used both to extract trip parameters from a query
//! and to phrase the final answer.

mod client;
mod error;
mod types;

pub use client::{ChatModel, OpenAiClient, OpenAiConfig};
pub use error::LlmError;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChoiceMessage, Role};
