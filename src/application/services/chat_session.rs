use crate::application::ports::{ChatReply, ChatTransport, ChatTransportError, OutboundChat};
use crate::domain::{
    BackendKind, ChatMessage, FileAcceptancePolicy, FileId, FileRejection, MessageRole,
    UploadedFile,
};

pub const FAILURE_REPLY: &str = "Sorry, I could not process your request. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a message is already being sent")]
    SendInFlight,
    #[error("type a message or attach a file first")]
    NothingToSend,
}

/// Client-held state for one chat session: the transcript, the files queued
/// for the next send and the error banner. Lives until the page is reloaded.
#[derive(Debug)]
pub struct ChatSession {
    backend: BackendKind,
    model: Option<String>,
    policy: FileAcceptancePolicy,
    messages: Vec<ChatMessage>,
    pending_files: Vec<UploadedFile>,
    in_flight: bool,
    error: Option<String>,
}

impl ChatSession {
    pub fn new(backend: BackendKind) -> Self {
        Self::with_policy(backend, FileAcceptancePolicy::default())
    }

    pub fn with_policy(backend: BackendKind, policy: FileAcceptancePolicy) -> Self {
        Self {
            backend,
            model: None,
            policy,
            messages: Vec::new(),
            pending_files: Vec::new(),
            in_flight: false,
            error: None,
        }
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    pub fn set_backend(&mut self, backend: BackendKind) {
        self.backend = backend;
    }

    pub fn set_model(&mut self, model: Option<String>) {
        self.model = model;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending_files(&self) -> &[UploadedFile] {
        &self.pending_files
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Queues every acceptable file and reports the ones that were skipped.
    pub fn add_files(&mut self, files: Vec<UploadedFile>) -> Vec<FileRejection> {
        let mut rejections = Vec::new();

        for file in files {
            match self.policy.check(&file.name, &file.mime_type, file.size) {
                Ok(()) => self.pending_files.push(file),
                Err(rejection) => {
                    tracing::debug!(%rejection, "File skipped");
                    rejections.push(rejection);
                }
            }
        }

        if let Some(first) = rejections.first() {
            self.error = Some(first.to_string());
        }

        rejections
    }

    pub fn remove_file(&mut self, id: FileId) -> Option<UploadedFile> {
        let index = self.pending_files.iter().position(|f| f.id == id)?;
        Some(self.pending_files.remove(index))
    }

    /// Records the user turn and hands back the request to transmit. Pending
    /// files move into the request; the list is empty afterwards.
    pub fn begin_send(&mut self, message: &str) -> Result<OutboundChat, SessionError> {
        if self.in_flight {
            return Err(SessionError::SendInFlight);
        }

        let message = message.trim();
        if message.is_empty() && self.pending_files.is_empty() {
            return Err(SessionError::NothingToSend);
        }

        let files = std::mem::take(&mut self.pending_files);
        let display = if message.is_empty() {
            format!("Sent {} file(s)", files.len())
        } else {
            message.to_string()
        };

        self.messages.push(ChatMessage::with_attachments(
            MessageRole::User,
            display,
            files.clone(),
        ));
        self.in_flight = true;
        self.error = None;

        Ok(OutboundChat {
            backend: self.backend,
            message: (!message.is_empty()).then(|| message.to_string()),
            files,
            model: self.model.clone(),
        })
    }

    pub fn complete_send(&mut self, result: Result<ChatReply, ChatTransportError>) {
        match result {
            Ok(reply) => {
                self.messages
                    .push(ChatMessage::new(MessageRole::Assistant, reply.response));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat submission failed");
                self.error = Some(e.to_string());
                self.messages
                    .push(ChatMessage::new(MessageRole::Assistant, FAILURE_REPLY.to_string()));
            }
        }
        self.in_flight = false;
    }

    /// Runs one full turn through `transport`. Transport failures end up in
    /// the transcript and the banner, not in the return value.
    pub async fn send<T>(&mut self, transport: &T, message: &str) -> Result<(), SessionError>
    where
        T: ChatTransport + ?Sized,
    {
        let outbound = self.begin_send(message)?;
        let result = transport.submit(&outbound).await;
        self.complete_send(result);
        Ok(())
    }
}
