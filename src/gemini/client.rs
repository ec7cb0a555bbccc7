use super::types::GenerateContentRequest;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Fixed model identifier; not configurable per request.
pub const MODEL_ID: &str = "gemini-2.5-flash-preview-09-2025";

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Sends one `generateContent` call and returns the parsed response body,
    /// whatever the HTTP status was.
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::new_with_client(base_url, Client::new())
    }

    pub fn new_with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, MODEL_ID
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value> {
        debug!("Calling generateContent on {}", self.endpoint());

        // No timeout and no retry: a single attempt bounded by the host.
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;

        debug!(
            "Upstream responded with status {} ({} bytes)",
            status,
            body.len()
        );

        Ok(serde_json::from_slice(&body)?)
    }
}
