use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docchat::application::ports::{LlmClient, LlmClientError, PromptOptions};
use docchat::infrastructure::llm::GeminiClient;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
    GeminiClient::new(
        format!("{}{}", server.uri(), GENERATE_PATH),
        api_key.map(str::to_string),
    )
}

fn candidate_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ], "role": "model" } }
        ]
    })
}

#[tokio::test]
async fn given_api_key_when_sending_then_posts_prompt_with_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [ { "parts": [ { "text": "Explain Rust" } ] } ],
            "generationConfig": {
                "temperature": 0.3,
                "topP": 0.9,
                "maxOutputTokens": 2048
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_reply("Rust is...")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server, Some("test-key"))
        .send_prompt("Explain Rust", &PromptOptions::default())
        .await
        .unwrap();

    assert_eq!(reply.text, "Rust is...");
}

#[tokio::test]
async fn given_no_candidates_when_sending_then_returns_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let reply = client_for(&server, Some("k"))
        .send_prompt("x", &PromptOptions::default())
        .await
        .unwrap();

    assert_eq!(reply.text, "");
}

#[tokio::test]
async fn given_missing_key_when_sending_then_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("   "));
    assert!(!client.has_api_key());

    let result = client.send_prompt("x", &PromptOptions::default()).await;

    match result {
        Err(e @ LlmClientError::MissingApiKey(_)) => {
            assert_eq!(e.to_string(), "GEMINI_API_KEY is not configured");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_error_status_when_sending_then_reports_status_without_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let result = client_for(&server, Some("super-secret"))
        .send_prompt("x", &PromptOptions::default())
        .await;

    let message = result.unwrap_err().to_string();
    assert!(message.starts_with("Gemini API error: HTTP 400"));
    assert!(message.contains("API key not valid"));
    assert!(!message.contains("super-secret"));
}

#[tokio::test]
async fn given_non_json_body_when_sending_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server, Some("k"))
        .send_prompt("x", &PromptOptions::default())
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_quota_exhausted_when_sending_then_error_carries_quota_explanation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": { "code": 429, "message": "Quota exceeded for generate_content requests" }
        })))
        .mount(&server)
        .await;

    let result = client_for(&server, Some("k"))
        .send_prompt("x", &PromptOptions::default())
        .await;

    match result {
        Err(e @ LlmClientError::RateLimited(_)) => {
            let message = e.to_string();
            assert!(message.starts_with("Gemini API error: HTTP 429"));
            assert!(message.contains("Quota exceeded"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
