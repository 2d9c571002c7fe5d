//! Travel duration assistant.
//!
//! Answers questions like "how long does it take to drive from Boston to
//! New York?" by combining a chat-completion model, which reads the
//! question and phrases the answer, with the Google Distance Matrix API,
//! which supplies the duration.

pub mod assistant;
pub mod config;
pub mod distance;
pub mod domain;
pub mod llm;
pub mod parser;
pub mod web;

#[cfg(test)]
mod testing;
