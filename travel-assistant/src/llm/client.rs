//! Chat-completion HTTP client.
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint. Every
//! prompt this crate sends is one system message plus one user message.

use std::fmt;
use std::future::Future;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use super::error::LlmError;
use super::types::{ChatMessage, ChatRequest, ChatResponse};

/// Default base URL for the completion API.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A language model that answers a system + user prompt pair with text.
///
/// This abstraction lets the pipeline be tested with scripted replies.
pub trait ChatModel: Send + Sync {
    /// Send one completion request and return the raw completion text.
    fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Configuration for the chat-completion client.
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API key, sent as a bearer token
    pub api_key: String,
    /// Base URL for the API, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Chat-completion API client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OpenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| LlmError::NotConfigured("invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            model: config.model,
        })
    }

    /// The model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ChatModel for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LlmError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let completion: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::malformed(e, &body))?;

        completion.into_text().ok_or(LlmError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn config_builder() {
        let config = OpenAiConfig::new("test-key")
            .with_base_url("http://localhost:8080/v1")
            .with_model("gpt-4o")
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = OpenAiConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_debug_redacts_key() {
        let config = OpenAiConfig::new("sk-secret-value");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn client_creation() {
        let client = OpenAiClient::new(OpenAiConfig::new("test-key")).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.endpoint, "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn client_rejects_unprintable_key() {
        let result = OpenAiClient::new(OpenAiConfig::new("bad\nkey"));
        assert!(matches!(result, Err(LlmError::NotConfigured(_))));
    }

    fn client_for(server: &mockito::Server) -> OpenAiClient {
        OpenAiClient::new(OpenAiConfig::new("test-key").with_base_url(server.url())).unwrap()
    }

    #[tokio::test]
    async fn complete_sends_messages_and_returns_text_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "  Hi there!\n"}}]}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let text = client.complete("be brief", "hello").await.unwrap();

        assert_eq!(text, "  Hi there!\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unauthorized_status_maps_to_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .create_async()
            .await;

        let result = client_for(&server).complete("s", "u").await;
        assert!(matches!(result, Err(LlmError::Unauthorized)));
    }

    #[tokio::test]
    async fn too_many_requests_maps_to_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .create_async()
            .await;

        let result = client_for(&server).complete("s", "u").await;
        assert!(matches!(result, Err(LlmError::RateLimited)));
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let result = client_for(&server).complete("s", "u").await;
        match result {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_reported_as_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let result = client_for(&server).complete("s", "u").await;
        assert!(matches!(result, Err(LlmError::Malformed { .. })));
    }

    #[tokio::test]
    async fn missing_choices_is_empty_completion() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let result = client_for(&server).complete("s", "u").await;
        assert!(matches!(result, Err(LlmError::EmptyCompletion)));
    }
}
