mod gemini_client;
mod ollama_client;

pub use gemini_client::{DEFAULT_GEMINI_URL, GEMINI_API_KEY_VAR, GeminiClient};
pub use ollama_client::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, OllamaClient};
