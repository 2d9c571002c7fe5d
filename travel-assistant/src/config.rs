//! Startup configuration.
//!
//! Everything is read from environment variables, optionally seeded from a
//! `.env` file. Variables already set in the process environment take
//! precedence over the file.

use std::collections::HashMap;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;

use crate::distance::DistanceMatrixConfig;
use crate::llm::OpenAiConfig;

const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const OPENAI_MODEL: &str = "OPENAI_MODEL";
const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
const DISTANCE_MATRIX_URL: &str = "DISTANCE_MATRIX_URL";
const BIND_ADDR: &str = "ASSISTANT_BIND_ADDR";
const TIMEOUT_SECS: &str = "ASSISTANT_TIMEOUT_SECS";

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_DISTANCE_MATRIX_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";
const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("{0} must be set")]
    MissingVar(&'static str),

    /// A variable is set but unusable
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// The dotenv file could not be read
    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Settings for the assistant and its HTTP front end.
#[derive(Clone)]
pub struct AssistantConfig {
    pub openai_api_key: String,
    pub maps_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub distance_matrix_url: String,
    pub bind_addr: SocketAddr,
    pub timeout_secs: u64,
}

impl AssistantConfig {
    /// Load from the process environment, after merging `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is normal; set variables are never overwritten.
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from a specific dotenv file, ignoring the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    /// Load using `lookup` to fetch each variable by name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let openai_api_key = required(OPENAI_API_KEY)?;
        let maps_api_key = required(GOOGLE_MAPS_API_KEY)?;

        let bind_addr = match get(BIND_ADDR) {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: BIND_ADDR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let timeout_secs = match get(TIMEOUT_SECS) {
            Some(value) => parse_timeout(&value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key,
            maps_api_key,
            openai_model: get(OPENAI_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get(OPENAI_BASE_URL)
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            distance_matrix_url: get(DISTANCE_MATRIX_URL)
                .unwrap_or_else(|| DEFAULT_DISTANCE_MATRIX_URL.to_string()),
            bind_addr,
            timeout_secs,
        })
    }

    /// Settings for the chat completion client.
    pub fn openai(&self) -> OpenAiConfig {
        OpenAiConfig::new(&self.openai_api_key)
            .with_base_url(&self.openai_base_url)
            .with_model(&self.openai_model)
            .with_timeout(self.timeout_secs)
    }

    /// Settings for the distance matrix client.
    pub fn distance_matrix(&self) -> DistanceMatrixConfig {
        DistanceMatrixConfig::new(&self.maps_api_key)
            .with_base_url(&self.distance_matrix_url)
            .with_timeout(self.timeout_secs)
    }
}

fn parse_timeout(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: TIMEOUT_SECS,
        value: value.to_string(),
        reason,
    };

    let secs: u64 = value.parse().map_err(|e| invalid(format!("{e}")))?;
    if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(invalid(format!("must be between 1 and {MAX_TIMEOUT_SECS}")));
    }
    Ok(secs)
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("openai_api_key", &"[redacted]")
            .field("maps_api_key", &"[redacted]")
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("distance_matrix_url", &self.distance_matrix_url)
            .field("bind_addr", &self.bind_addr)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
