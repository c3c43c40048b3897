use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use serde::Deserialize;

use crate::application::ports::{ChatReply, ChatTransport, ChatTransportError, OutboundChat};
use crate::domain::BackendKind;

/// Posts chat submissions to a running gateway as multipart forms.
pub struct HttpChatTransport {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatApiResponse {
    success: bool,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    files_processed: Option<usize>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpChatTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_form(chat: &OutboundChat) -> Result<Form, ChatTransportError> {
        let mut form = Form::new().text("fileCount", chat.files.len().to_string());

        if let Some(message) = &chat.message {
            form = form.text("message", message.clone());
        }

        if chat.backend == BackendKind::Local {
            if let Some(model) = &chat.model {
                form = form.text("model", model.clone());
            }
        }

        for (index, file) in chat.files.iter().enumerate() {
            let descriptor = serde_json::to_string(&file.to_descriptor())
                .map_err(|e| ChatTransportError::RequestFailed(e.to_string()))?;
            form = form.text(format!("file_{index}"), descriptor);
        }

        Ok(form)
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    #[tracing::instrument(skip(self, chat), fields(backend = %chat.backend, files = chat.files.len()))]
    async fn submit(&self, chat: &OutboundChat) -> Result<ChatReply, ChatTransportError> {
        let url = format!("{}{}", self.base_url, chat.backend.route());
        let form = Self::build_form(chat)?;

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ChatTransportError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body: ChatApiResponse = response
            .json()
            .await
            .map_err(|e| ChatTransportError::InvalidResponse(e.to_string()))?;

        if !status.is_success() || !body.success {
            return Err(ChatTransportError::Rejected {
                status: status.as_u16(),
                message: body
                    .error
                    .unwrap_or_else(|| format!("request failed with HTTP {status}")),
            });
        }

        Ok(ChatReply {
            response: body.response.unwrap_or_default(),
            files_processed: body.files_processed.unwrap_or(0),
        })
    }
}
