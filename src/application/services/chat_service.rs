use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, LlmClientError, PromptOptions};
use crate::domain::{BackendKind, UploadedFile};

use super::file_normalizer::FileNormalizer;
use super::prompt_assembler::PromptRequest;

/// A decoded chat submission.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub files: Vec<UploadedFile>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOutcome {
    pub response: String,
    pub files_processed: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Please provide a message or upload at least one file")]
    EmptyRequest,
    #[error(transparent)]
    Backend(#[from] LlmClientError),
}

/// Request pipeline for one backend: normalize, assemble, send, extract.
pub struct ChatService {
    backend: BackendKind,
    llm_client: Arc<dyn LlmClient>,
    normalizer: FileNormalizer,
}

impl ChatService {
    pub fn new(llm_client: Arc<dyn LlmClient>, file_loader: Arc<dyn FileLoader>) -> Self {
        Self {
            backend: llm_client.backend(),
            llm_client,
            normalizer: FileNormalizer::new(file_loader),
        }
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    pub async fn build_prompt(&self, message: Option<String>, files: &[UploadedFile]) -> String {
        let normalized = self.normalizer.normalize_all(files).await;
        PromptRequest::new(self.backend, message, normalized).render()
    }

    #[tracing::instrument(
        skip(self, request),
        fields(backend = %self.backend, file_count = request.files.len())
    )]
    pub async fn process(&self, request: ChatRequest) -> Result<ChatOutcome, ChatError> {
        let message = request
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        if message.is_none() && request.files.is_empty() {
            tracing::warn!("Chat request with neither message nor files");
            return Err(ChatError::EmptyRequest);
        }

        let files_processed = request.files.len();
        let prompt = self.build_prompt(message, &request.files).await;

        tracing::debug!(prompt_chars = prompt.chars().count(), "Prompt assembled");

        let options = PromptOptions {
            model: request.model.filter(|m| !m.trim().is_empty()),
        };
        let reply = self.llm_client.send_prompt(&prompt, &options).await?;

        tracing::info!(
            files_processed,
            response_chars = reply.text.chars().count(),
            "Chat completed"
        );

        Ok(ChatOutcome {
            response: reply.text,
            files_processed,
        })
    }
}
