use async_trait::async_trait;

use crate::domain::BackendKind;

/// A model backend that accepts one assembled prompt and returns one reply.
#[async_trait]
pub trait LlmClient: Send + Sync {
    fn backend(&self) -> BackendKind;

    async fn send_prompt(
        &self,
        prompt: &str,
        options: &PromptOptions,
    ) -> Result<LlmReply, LlmClientError>;
}

/// Per-request knobs supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Overrides the configured model identifier, where the backend allows it.
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmReply {
    /// Reply text, empty when the backend returned nothing usable.
    pub text: String,
    /// The backend's response envelope as received.
    pub raw: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("{0} is not configured")]
    MissingApiKey(String),
    #[error("{0}")]
    ApiRequestFailed(String),
    #[error("{0}")]
    RateLimited(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
