use async_trait::async_trait;
use reqwest::Client;
use textrelay_common::{Result, TextRelayError};
use tracing::debug;

use crate::relay::CompletionRelay;
use crate::types::{ChatRequest, ChatResponse};

/// OpenRouter chat-completion client
///
/// One request per call, no retry, no timeout: the call blocks its caller
/// until the remote service responds. The API key travels with each
/// request rather than with the client, since every request carries the
/// caller's own credential.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    base_url: String,
    referer: String,
    http: Client,
}

impl OpenRouterClient {
    /// Create new client against an OpenRouter-compatible base URL
    pub fn new(base_url: impl Into<String>, referer: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            referer: referer.into(),
            http: Client::new(),
        }
    }

    /// Submit one chat-completion request and extract the first choice.
    ///
    /// The message content is the prompt, a newline, then the segment.
    /// A non-success status surfaces the raw response body verbatim.
    pub async fn complete_segment(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        segment: &str,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest::user(model, format!("{}\n{}", prompt, segment));

        debug!(
            "Sending completion request - Model: {}, Content length: {}",
            model,
            request.messages[0].content.len()
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .json(&request)
            .send()
            .await
            .map_err(|e| TextRelayError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TextRelayError::upstream(body));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            TextRelayError::unexpected_shape(format!("Failed to parse response: {}", e))
        })?;

        let content = parsed.into_first_content()?;
        debug!("Received completion - Length: {}", content.len());
        Ok(content)
    }
}

#[async_trait]
impl CompletionRelay for OpenRouterClient {
    async fn complete(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        segment: &str,
    ) -> Result<String> {
        self.complete_segment(api_key, model, prompt, segment).await
    }
}
