//! Distance Matrix client and duration resolution.
//!
//! Looks up the travel duration between two free-text places for a mode of
//! travel, and validates that the service actually recognised both places.

mod client;
mod error;
mod resolver;
mod types;

pub use client::{DistanceMatrixClient, DistanceMatrixConfig, DurationProvider};
pub use error::DistanceError;
pub use resolver::{evaluate, resolve};
pub use types::{
    DistanceMatrixResponse, ElementStatus, MatrixElement, MatrixRow, MatrixStatus, TextValue,
};
