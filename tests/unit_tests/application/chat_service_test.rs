use std::sync::Arc;

use docchat::application::ports::{LlmClient, LlmClientError};
use docchat::application::services::{ChatError, ChatRequest, ChatService};
use docchat::domain::{BackendKind, UploadedFile};
use docchat::infrastructure::text_processing::ExtractorFactory;

use crate::common::RecordingLlmClient;

fn service_with(client: Arc<RecordingLlmClient>) -> ChatService {
    let backend = client.backend();
    ChatService::new(client, Arc::new(ExtractorFactory::create(backend)))
}

fn text_file(name: &str, content: &str) -> UploadedFile {
    UploadedFile::new(
        name.to_string(),
        content.len() as u64,
        "text/plain".to_string(),
        content.to_string(),
    )
}

#[tokio::test]
async fn given_whitespace_message_and_no_files_when_processing_then_rejects_without_calling_backend() {
    let client = Arc::new(RecordingLlmClient::replying(BackendKind::Local, "unused"));
    let service = service_with(Arc::clone(&client));

    let result = service
        .process(ChatRequest {
            message: Some("   ".into()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(ChatError::EmptyRequest)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn given_message_when_processing_then_returns_reply_verbatim() {
    let client = Arc::new(RecordingLlmClient::replying(BackendKind::Cloud, "  spaced reply\n"));
    let service = service_with(Arc::clone(&client));

    let outcome = service
        .process(ChatRequest {
            message: Some("  hello  ".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(outcome.response, "  spaced reply\n");
    assert_eq!(outcome.files_processed, 0);
    assert!(client.last_prompt().contains("User message: hello"));
}

#[tokio::test]
async fn given_files_only_when_processing_then_counts_files_and_includes_them() {
    let client = Arc::new(RecordingLlmClient::replying(BackendKind::Local, "ok"));
    let service = service_with(Arc::clone(&client));

    let outcome = service
        .process(ChatRequest {
            files: vec![text_file("a.txt", "alpha"), text_file("b.txt", "beta")],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(outcome.files_processed, 2);
    let prompt = client.last_prompt();
    assert!(!prompt.contains("User message:"));
    assert!(prompt.contains("alpha"));
    assert!(prompt.contains("beta"));
}

#[tokio::test]
async fn given_blank_model_when_processing_then_sends_no_model_override() {
    let client = Arc::new(RecordingLlmClient::replying(BackendKind::Local, "ok"));
    let service = service_with(Arc::clone(&client));

    service
        .process(ChatRequest {
            message: Some("hi".into()),
            model: Some(" ".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(client.options.lock().unwrap()[0].model, None);
}

#[tokio::test]
async fn given_backend_error_when_processing_then_propagates_message() {
    let client = Arc::new(RecordingLlmClient::failing(BackendKind::Local, "connection refused"));
    let service = service_with(client);

    let result = service
        .process(ChatRequest {
            message: Some("hi".into()),
            ..Default::default()
        })
        .await;

    match result {
        Err(ChatError::Backend(LlmClientError::ApiRequestFailed(message))) => {
            assert_eq!(message, "connection refused");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_client_backend_when_building_service_then_service_reports_it() {
    let client = Arc::new(RecordingLlmClient::replying(BackendKind::Cloud, "ok"));

    assert_eq!(service_with(client).backend(), BackendKind::Cloud);
}
