//! Web layer for the travel duration assistant.
//!
//! Serves a question form and a JSON endpoint, both backed by the same
//! [`Assistant`](crate::assistant::Assistant).

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LiveAssistant};
pub use templates::IndexTemplate;
