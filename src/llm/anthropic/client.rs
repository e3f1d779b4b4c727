//! Anthropic Messages API client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::str::FromStr;

use crate::llm::core::{
    error::LlmError,
    provider::{EventStream, LlmProvider},
    types::{GenerateRequest, UsageMetadata},
};

use super::mapper::{from_anthropic_event, to_messages_request};
use super::sse::parse_sse_stream;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic model identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnthropicModel {
    /// Claude Sonnet 4.5
    Sonnet45,
    /// Claude Haiku 4.5
    Haiku45,
}

impl AnthropicModel {
    /// Get the model identifier string for the Messages API
    pub fn as_str(&self) -> &str {
        match self {
            AnthropicModel::Sonnet45 => "claude-sonnet-4-5",
            AnthropicModel::Haiku45 => "claude-haiku-4-5",
        }
    }
}

impl FromStr for AnthropicModel {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sonnet" | "claude-sonnet-4-5" => Ok(AnthropicModel::Sonnet45),
            "haiku" | "claude-haiku-4-5" => Ok(AnthropicModel::Haiku45),
            other => Err(LlmError::InvalidRequest(format!(
                "Unknown model: {}",
                other
            ))),
        }
    }
}

/// Client for the Anthropic Messages API
pub struct AnthropicClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key, passed through as an opaque secret
    api_key: String,
    /// Model to use
    model: AnthropicModel,
    /// API base URL (overridable for tests)
    base_url: String,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: String, model: AnthropicModel) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests against a local stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_endpoint_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Make a streaming request to the Messages API
    async fn make_streaming_request(
        &self,
        request: GenerateRequest,
    ) -> Result<EventStream, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::InvalidRequest(
                "messages must not be empty".to_string(),
            ));
        }

        let wire_request = to_messages_request(self.model.as_str(), request);

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let byte_stream = response.bytes_stream();
        let sse_stream = parse_sse_stream(Box::pin(byte_stream));

        let mut accumulated_usage = UsageMetadata::new(0, 0);

        let event_stream = sse_stream.flat_map(move |result| match result {
            Ok(wire_event) => {
                let events = from_anthropic_event(wire_event, &mut accumulated_usage);
                futures::stream::iter(events.into_iter().map(Ok).collect::<Vec<_>>())
            }
            Err(e) => futures::stream::iter(vec![Err(e)]),
        });

        Ok(Box::pin(event_stream))
    }
}

#[async_trait]
impl LlmProvider for AnthropicClient {
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError> {
        self.make_streaming_request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_as_str() {
        assert_eq!(AnthropicModel::Sonnet45.as_str(), "claude-sonnet-4-5");
        assert_eq!(AnthropicModel::Haiku45.as_str(), "claude-haiku-4-5");
    }

    #[test]
    fn test_model_from_str() {
        assert_eq!(
            "haiku".parse::<AnthropicModel>().unwrap(),
            AnthropicModel::Haiku45
        );
        assert_eq!(
            "claude-sonnet-4-5".parse::<AnthropicModel>().unwrap(),
            AnthropicModel::Sonnet45
        );
        assert!("gpt-4".parse::<AnthropicModel>().is_err());
    }

    #[test]
    fn test_endpoint_url() {
        let client = AnthropicClient::new("key".to_string(), AnthropicModel::Haiku45).unwrap();
        assert_eq!(
            client.build_endpoint_url(),
            "https://api.anthropic.com/v1/messages"
        );

        let client = client.with_base_url("http://127.0.0.1:9999");
        assert_eq!(
            client.build_endpoint_url(),
            "http://127.0.0.1:9999/v1/messages"
        );
    }

    #[tokio::test]
    async fn test_empty_messages_rejected() {
        use crate::llm::core::config::GenerationConfig;

        let client = AnthropicClient::new("key".to_string(), AnthropicModel::Haiku45).unwrap();
        let request = GenerateRequest {
            messages: vec![],
            config: GenerationConfig::new(100),
            system: None,
        };

        let result = client.stream_generate(request).await;
        assert!(matches!(result, Err(LlmError::InvalidRequest(_))));
    }
}
