//! Integration tests for `GeminiClient` using wiremock HTTP mocks.

use culturasphere_gemini::{GeminiClient, GeminiError, GenerationOptions};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn test_client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_endpoint("test-key", 5, &format!("{}{MODEL_PATH}", server.uri()))
        .expect("client construction should not fail")
}

fn reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn complete_returns_first_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Describe quiet luxury" }] }],
            "generationConfig": { "topK": 40, "maxOutputTokens": 1024 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("{\"ok\": true}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let text = client
        .complete("Describe quiet luxury", &GenerationOptions::default())
        .await
        .expect("completion should succeed");
    assert_eq!(text, "{\"ok\": true}");
}

#[tokio::test]
async fn complete_forwards_custom_options() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "generationConfig": { "maxOutputTokens": 256 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("short")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let options = GenerationOptions::default().with_max_output_tokens(256);
    let text = client.complete("hi", &options).await.unwrap();
    assert_eq!(text, "short");
}

#[tokio::test]
async fn non_2xx_is_http_error_without_key_in_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .complete("hi", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GeminiError::Http(_)), "got: {err:?}");
    assert!(
        !err.to_string().contains("test-key"),
        "error must not leak the API key: {err}"
    );
}

#[tokio::test]
async fn empty_candidates_is_malformed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .complete("hi", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GeminiError::MalformedEnvelope(_)), "got: {err:?}");
}

#[tokio::test]
async fn non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("upstream proxy error"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .complete("hi", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GeminiError::Deserialize { .. }), "got: {err:?}");
}
