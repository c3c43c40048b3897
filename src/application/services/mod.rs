mod chat_service;
mod chat_session;
mod file_normalizer;
mod prompt_assembler;

pub use chat_service::{ChatError, ChatOutcome, ChatRequest, ChatService};
pub use chat_session::{ChatSession, FAILURE_REPLY, SessionError};
pub use file_normalizer::{
    FileNormalizer, IMAGE_PLACEHOLDER_PHRASE, MAX_FILE_CHARS, TRUNCATION_NOTICE, cap_length,
    describe_image,
};
pub use prompt_assembler::{PromptFile, PromptRequest, system_instruction};
