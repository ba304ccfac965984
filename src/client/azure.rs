//! Azure OpenAI chat-completions client.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;

use super::{ChatBackend, ChatRequest, ChatResponse};
use crate::config::AzureConfig;
use crate::error::{BenchError, Result};

/// HTTPS client for one Azure OpenAI deployment
#[derive(Debug, Clone)]
pub struct AzureChatClient {
    http: Client,
    config: AzureConfig,
    url: String,
}

impl AzureChatClient {
    /// Create a client with the given request timeout
    pub fn new(config: AzureConfig, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let url = config.completions_url();
        Ok(Self { http, config, url })
    }

    /// Chat-completions URL requests are posted to
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        tracing::debug!(
            url = %self.url,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(&self.url)
            .header("api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BenchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "Received chat completion response");
        parse_response(&body)
    }
}

impl ChatBackend for AzureChatClient {
    fn complete<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse>> + Send + 'a>> {
        Box::pin(self.send(request))
    }

    fn model(&self) -> &str {
        &self.config.deployment
    }
}

/// Parse a chat-completions response body.
pub fn parse_response(body: &str) -> Result<ChatResponse> {
    serde_json::from_str(body)
        .map_err(|e| BenchError::InvalidResponse(format!("Failed to parse chat completion: {e}")))
}
