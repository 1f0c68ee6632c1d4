//! Integration tests for `HuggingFaceClient` using wiremock HTTP mocks.

use culturasphere_core::{PersonaForm, TrendRecord};
use culturasphere_huggingface::{HuggingFaceClient, HuggingFaceError, PersonaTextInsights};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SENTIMENT_PATH: &str = "/models/cardiffnlp/twitter-roberta-base-sentiment-latest";

fn test_client(base_url: &str) -> HuggingFaceClient {
    HuggingFaceClient::with_base_url("hf-key", 5, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn generate_text_returns_first_generation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .and(header("authorization", "Bearer hf-key"))
        .and(body_partial_json(json!({
            "inputs": "Cultural trends in",
            "options": { "max_length": 200 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "Cultural trends in music favour remix culture." }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let text = client
        .generate_text("Cultural trends in", "gpt2")
        .await
        .expect("generation should succeed");
    assert_eq!(text, "Cultural trends in music favour remix culture.");
}

fn trend() -> TrendRecord {
    TrendRecord {
        name: "Slow Living".to_string(),
        category: "Lifestyle".to_string(),
        region: "Europe".to_string(),
        description: "People are choosing fewer, better things".to_string(),
        keywords: vec!["mindful".to_string()],
        ..TrendRecord::default()
    }
}

#[tokio::test]
async fn analyze_cultural_trend_combines_generation_and_sentiment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "Significance: a move to slow living. We recommend limited drops." }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .and(body_partial_json(json!({
            "inputs": "People are choosing fewer, better things"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            { "label": "positive", "score": 0.83 }
        ]])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let analysis = client
        .analyze_cultural_trend(&trend())
        .await
        .expect("analysis should be produced");

    assert_eq!(
        analysis.analysis,
        "Significance: a move to slow living. We recommend limited drops."
    );
    assert_eq!(analysis.sentiment, "positive");
    assert!((analysis.confidence - 0.83).abs() < 1e-9);
    assert_eq!(analysis.cultural_significance, "Significance: a move to slow living");
    assert_eq!(analysis.recommendations, vec!["recommend limited drops"]);

    let requests = server.received_requests().await.expect("recording enabled");
    let prompt: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = prompt["inputs"].as_str().unwrap();
    assert!(prompt.contains("Name: Slow Living"));
    assert!(prompt.contains("Keywords: mindful"));
}

#[tokio::test]
async fn analyze_cultural_trend_is_none_when_generation_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.analyze_cultural_trend(&trend()).await.is_none());
}

#[tokio::test]
async fn analyze_cultural_trend_survives_sentiment_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "Nothing notable." }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let analysis = client.analyze_cultural_trend(&trend()).await.unwrap();
    assert_eq!(analysis.sentiment, "NEUTRAL");
    assert!((analysis.confidence - 0.5).abs() < f64::EPSILON);
    assert!(analysis.cultural_significance.is_empty());
    assert!(analysis.recommendations.is_empty());
}

#[tokio::test]
async fn persona_insights_use_dialogue_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/microsoft/DialoGPT-large"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "A cultural revival: trending upward. We recommend early partnerships." }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let form = PersonaForm {
        age_range: Some("18-24".to_string()),
        interests: Some("gaming, anime".to_string()),
        ..PersonaForm::default()
    };
    let insights = client.persona_insights(&form).await;

    assert_eq!(insights.sentiment, "positive");
    assert_eq!(insights.cultural_context, vec!["cultural revival"]);
    assert_eq!(insights.trends, vec!["trending upward"]);
    assert_eq!(insights.recommendations, vec!["recommend early partnerships"]);

    let requests = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["inputs"].as_str().unwrap().contains("Interests: gaming, anime"));
}

#[tokio::test]
async fn persona_insights_fall_back_to_neutral() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let insights = client.persona_insights(&PersonaForm::default()).await;
    assert_eq!(insights, PersonaTextInsights::neutral());
}

#[tokio::test]
async fn analyze_sentiment_picks_top_label() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            { "label": "positive", "score": 0.91 },
            { "label": "neutral", "score": 0.07 },
            { "label": "negative", "score": 0.02 }
        ]])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let label = client.analyze_sentiment("love this").await.unwrap();
    assert_eq!(label.label, "positive");
    assert!((label.score - 0.91).abs() < 1e-9);

    let requests = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["inputs"], "love this");
    assert_eq!(body["options"], json!({}));
}

#[tokio::test]
async fn analyze_sentiment_or_neutral_swallows_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(matches!(
        client.analyze_sentiment("x").await,
        Err(HuggingFaceError::Http(_))
    ));
    let label = client.analyze_sentiment_or_neutral("x").await;
    assert_eq!(label.label, "NEUTRAL");
    assert!((label.score - 0.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn classify_text_sends_candidate_labels() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-mnli"))
        .and(body_partial_json(json!({
            "inputs": { "text": "vinyl sales", "candidate_labels": ["music", "food"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sequence": "vinyl sales",
            "labels": ["music", "food"],
            "scores": [0.95, 0.05]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let labels = client
        .classify_text("vinyl sales", &["music".to_string(), "food".to_string()])
        .await
        .unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].label, "music");
    assert!((labels[0].score - 0.95).abs() < 1e-9);
}
