mod chat_transport;
mod file_loader;
mod llm_client;

pub use chat_transport::{ChatReply, ChatTransport, ChatTransportError, OutboundChat};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError, LlmReply, PromptOptions};
