use async_trait::async_trait;

use crate::domain::{BackendKind, UploadedFile};

/// One chat submission as the client sends it.
#[derive(Debug, Clone)]
pub struct OutboundChat {
    pub backend: BackendKind,
    pub message: Option<String>,
    pub files: Vec<UploadedFile>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub files_processed: usize,
}

/// Carries a chat submission to the gateway.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn submit(&self, chat: &OutboundChat) -> Result<ChatReply, ChatTransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatTransportError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
