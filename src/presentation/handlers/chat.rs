use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{ChatError, ChatRequest, ChatService};
use crate::domain::{BackendKind, FileDescriptor};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_processed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    fn failure(status: StatusCode, error: String) -> Response {
        (
            status,
            Json(Self {
                success: false,
                response: None,
                files_processed: None,
                error: Some(error),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatFormError {
    #[error("failed to read form: {0}")]
    Multipart(String),
    #[error("invalid payload for file_{index}: {reason}")]
    InvalidFilePayload { index: usize, reason: String },
}

#[tracing::instrument(skip(state, multipart))]
pub async fn local_chat_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    handle_chat(Arc::clone(&state.local_chat), multipart).await
}

#[tracing::instrument(skip(state, multipart))]
pub async fn cloud_chat_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    handle_chat(Arc::clone(&state.cloud_chat), multipart).await
}

async fn handle_chat(
    service: Arc<ChatService>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let request = match multipart {
        Ok(multipart) => read_chat_form(multipart, service.backend()).await,
        Err(rejection) => Err(ChatFormError::Multipart(rejection.body_text())),
    };

    let request = match request {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "Failed to decode chat form");
            return ChatResponse::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", e),
            );
        }
    };

    tracing::debug!(
        message = %sanitize_prompt(request.message.as_deref().unwrap_or_default()),
        file_count = request.files.len(),
        "Processing chat request"
    );

    match service.process(request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ChatResponse {
                success: true,
                response: Some(outcome.response),
                files_processed: Some(outcome.files_processed),
                error: None,
            }),
        )
            .into_response(),
        Err(e @ ChatError::EmptyRequest) => {
            ChatResponse::failure(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(ChatError::Backend(e)) => {
            tracing::warn!(error = %e, "Backend call failed");
            ChatResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn read_chat_form(
    mut multipart: Multipart,
    backend: BackendKind,
) -> Result<ChatRequest, ChatFormError> {
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ChatFormError::Multipart(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ChatFormError::Multipart(e.body_text()))?;
        fields.insert(name, value);
    }

    parse_chat_fields(fields, backend)
}

/// Builds a [`ChatRequest`] from the decoded form fields.
pub fn parse_chat_fields(
    mut fields: HashMap<String, String>,
    backend: BackendKind,
) -> Result<ChatRequest, ChatFormError> {
    let file_count = match fields.get("fileCount").map(|v| v.trim()) {
        None | Some("") => 0,
        Some(raw) => raw.parse::<usize>().unwrap_or_else(|_| {
            tracing::warn!(file_count = raw, "Unparsable fileCount, treating as zero");
            0
        }),
    };

    // Only indices present in the form are visited, so the declared count
    // never drives allocation or iteration on its own.
    let mut indices: Vec<usize> = fields
        .keys()
        .filter_map(|key| file_field_index(key))
        .filter(|index| *index < file_count)
        .collect();
    indices.sort_unstable();

    if indices.len() < file_count {
        tracing::warn!(
            declared = file_count,
            received = indices.len(),
            "Declared file fields are missing"
        );
    }

    let mut files = Vec::with_capacity(indices.len());
    for index in indices {
        let Some(raw) = fields.remove(&format!("file_{index}")) else {
            continue;
        };

        let descriptor: FileDescriptor = serde_json::from_str(&raw).map_err(|e| {
            ChatFormError::InvalidFilePayload {
                index,
                reason: e.to_string(),
            }
        })?;
        files.push(descriptor.into_uploaded_file());
    }

    let model = match backend {
        BackendKind::Local => fields.remove("model"),
        BackendKind::Cloud => None,
    };

    Ok(ChatRequest {
        message: fields.remove("message"),
        files,
        model,
    })
}

/// Index of a canonical `file_<i>` field name.
fn file_field_index(key: &str) -> Option<usize> {
    let index: usize = key.strip_prefix("file_")?.parse().ok()?;
    (key.len() == "file_".len() + index.to_string().len()).then_some(index)
}
