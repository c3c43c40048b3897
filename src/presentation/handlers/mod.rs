mod chat;
mod health;

pub use chat::{
    ChatFormError, ChatResponse, cloud_chat_handler, local_chat_handler, parse_chat_fields,
};
pub use health::health_handler;
