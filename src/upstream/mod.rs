use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;

use crate::api::types::ChatMessage;
use crate::config::RelayConfig;

/// Status and body exactly as the provider returned them. The body stays an
/// opaque JSON value; its shape is provider-controlled.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}

/// Single outbound call to a chat-completions provider. The relay swaps in a
/// recording stub here under test.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn chat_completions(
        &self,
        api_key: &str,
        model: &str,
        messages: &[ChatMessage],
    ) -> anyhow::Result<UpstreamReply>;
}

/// OpenRouter client. One attempt per call, no retries, no status
/// interpretation; 4xx/5xx provider replies are returned as `Ok` and the
/// relay passes them through.
pub struct OpenRouterClient {
    client: reqwest::Client,
    url: String,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.upstream_url.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
        }
    }
}

#[async_trait]
impl UpstreamClient for OpenRouterClient {
    async fn chat_completions(
        &self,
        api_key: &str,
        model: &str,
        messages: &[ChatMessage],
    ) -> anyhow::Result<UpstreamReply> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&serde_json::json!({
                "model": model,
                "messages": messages,
            }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        Ok(UpstreamReply { status, body })
    }
}
