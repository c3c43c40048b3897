use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::ChatService;
use crate::domain::BackendKind;
use crate::infrastructure::llm::{GeminiClient, OllamaClient};
use crate::infrastructure::text_processing::ExtractorFactory;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub local_chat: Arc<ChatService>,
    pub cloud_chat: Arc<ChatService>,
    pub settings: Settings,
}

impl AppState {
    /// Wires both backends from settings, each with its own file loader policy.
    pub fn from_settings(settings: Settings) -> Self {
        let local: Arc<dyn LlmClient> = Arc::new(OllamaClient::from_settings(&settings.local));
        let cloud: Arc<dyn LlmClient> = Arc::new(GeminiClient::from_settings(&settings.cloud));
        Self::with_clients(settings, local, cloud)
    }

    pub fn with_clients(
        settings: Settings,
        local: Arc<dyn LlmClient>,
        cloud: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            local_chat: Arc::new(ChatService::new(
                local,
                Arc::new(ExtractorFactory::create(BackendKind::Local)),
            )),
            cloud_chat: Arc::new(ChatService::new(
                cloud,
                Arc::new(ExtractorFactory::create(BackendKind::Cloud)),
            )),
            settings,
        }
    }
}
