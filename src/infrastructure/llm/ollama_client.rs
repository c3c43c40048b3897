use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError, LlmReply, PromptOptions};
use crate::domain::BackendKind;
use crate::presentation::config::LocalModelSettings;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Local inference server speaking the Ollama `generate` API.
pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

impl OllamaClient {
    pub fn new(url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            url,
            model,
        }
    }

    pub fn from_settings(settings: &LocalModelSettings) -> Self {
        Self::new(settings.url.clone(), settings.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    fn backend(&self) -> BackendKind {
        BackendKind::Local
    }

    #[tracing::instrument(skip(self, prompt, options), fields(url = %self.url))]
    async fn send_prompt(
        &self,
        prompt: &str,
        options: &PromptOptions,
    ) -> Result<LlmReply, LlmClientError> {
        let model = options.model.as_deref().unwrap_or(&self.model);
        tracing::debug!(model, "Sending prompt to local model");

        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest {
                model,
                prompt,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("Ollama request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::RateLimited(format!(
                "Ollama API error: HTTP 429 Too Many Requests: {}",
                body
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "Ollama API error: HTTP {}: {}",
                status, body
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let parsed: GenerateResponse = serde_json::from_value(raw.clone())
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        Ok(LlmReply {
            text: parsed.response.unwrap_or_default(),
            raw,
        })
    }
}
