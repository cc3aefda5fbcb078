use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{GenAiError, Result};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// One attempt per call; a hung endpoint fails through this timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Generative Language `generateContent` endpoint.
///
/// Every call requests structured JSON output; callers hand in the response
/// schema and get back the parsed `serde_json::Value` of the reply.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GenAiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a rendered prompt and a response schema; return the reply JSON.
    pub async fn generate_json(&self, prompt: &str, response_schema: Value) -> Result<Value> {
        let request = GenerateContentRequest::new(prompt, response_schema);

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let reply: GenerateContentResponse = self.handle_response(response).await?;

        let text = reply
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or(GenAiError::EmptyResponse)?;

        let value = serde_json::from_str(text)
            .map_err(|e| GenAiError::InvalidResponse(format!("reply is not valid JSON: {}", e)))?;

        Ok(value)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "model endpoint returned an error");
            return Err(GenAiError::InvalidResponse(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.json().await?;
        Ok(body)
    }
}
