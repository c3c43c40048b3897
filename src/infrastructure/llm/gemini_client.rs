use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError, LlmReply, PromptOptions};
use crate::domain::BackendKind;
use crate::presentation::config::CloudModelSettings;

pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

const TEMPERATURE: f32 = 0.3;
const TOP_P: f32 = 0.9;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Cloud generation API in the Gemini `generateContent` shape.
pub struct GeminiClient {
    client: Client,
    url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn from_settings(settings: &CloudModelSettings) -> Self {
        Self::new(settings.url.clone(), settings.api_key.clone())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    fn backend(&self) -> BackendKind {
        BackendKind::Cloud
    }

    #[tracing::instrument(skip(self, prompt, _options), fields(url = %self.url))]
    async fn send_prompt(
        &self,
        prompt: &str,
        _options: &PromptOptions,
    ) -> Result<LlmReply, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmClientError::MissingApiKey(GEMINI_API_KEY_VAR.to_string()))?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            // reqwest errors can embed the full URL, including the key.
            .map_err(|e| {
                LlmClientError::ApiRequestFailed(format!(
                    "Gemini request failed: {}",
                    e.without_url()
                ))
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::RateLimited(format!(
                "Gemini API error: HTTP 429 Too Many Requests: {}",
                body
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "Gemini API error: HTTP {}: {}",
                status, body
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.without_url().to_string()))?;

        let parsed: GenerateContentResponse = serde_json::from_value(raw.clone())
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        Ok(LlmReply { text, raw })
    }
}
