use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{MessageRole, UploadedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of the session transcript. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    pub attachments: Vec<UploadedFile>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: String) -> Self {
        Self::with_attachments(role, content, Vec::new())
    }

    pub fn with_attachments(
        role: MessageRole,
        content: String,
        attachments: Vec<UploadedFile>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content,
            attachments,
            created_at: Utc::now(),
        }
    }
}
