//! `AggregationService` wired to the real HTTP clients against wiremock.

use culturasphere_core::{AppConfig, Environment, InsightFilters, PersonaForm, Sentiment};
use culturasphere_insights::{AggregationService, BuildError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn config(server: &MockServer) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "debug".to_string(),
        qloo_api_url: server.uri(),
        qloo_api_key: Some("qloo-key".to_string()),
        gemini_api_url: format!("{}{MODEL_PATH}", server.uri()),
        gemini_api_key: Some("gemini-key".to_string()),
        gemini_temperature: 0.3,
        gemini_max_output_tokens: 512,
        huggingface_api_url: server.uri(),
        huggingface_api_key: None,
        request_timeout_secs: 5,
        user_agent: "culturasphere-test".to_string(),
    }
}

fn service(server: &MockServer) -> AggregationService {
    AggregationService::from_config(&config(server)).expect("service construction should not fail")
}

#[tokio::test]
async fn service_requires_both_aggregation_keys() {
    let server = MockServer::start().await;

    let mut cfg = config(&server);
    cfg.huggingface_api_key = Some("hf-key".to_string());
    cfg.qloo_api_key = None;
    let err = AggregationService::from_config(&cfg).err().expect("qloo key is required");
    assert!(matches!(err, BuildError::MissingCredential("QLOO_API_KEY")), "got: {err:?}");

    let mut cfg = config(&server);
    cfg.gemini_api_key = None;
    let err = AggregationService::from_config(&cfg).err().expect("gemini key is required");
    assert!(matches!(err, BuildError::MissingCredential("GEMINI_API_KEY")), "got: {err:?}");
}

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

#[tokio::test]
async fn trends_are_fetched_and_enriched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends"))
        .and(query_param("category", "Music"))
        .and(header("authorization", "Bearer qloo-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trends": [
                { "name": "Hyperpop", "score": 72, "growth": 14, "keywords": ["glitch"] }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "gemini-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "maxOutputTokens": 512, "topK": 40 }
        })))
        .respond_with(gemini_reply(
            "Here is my analysis:\n{\"sentiment\": \"POSITIVE\", \"trends\": [\"digicore\"], \"confidence\": 0.9}\nHope this helps!",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let trends = service(&server).list_trends(Some("Music"), None).await;
    assert_eq!(trends.len(), 1);

    let trend = &trends[0];
    assert_eq!(trend.name, "Hyperpop");
    assert_eq!(trend.category, "Music");
    assert_eq!(trend.region, "Global");
    assert_eq!(trend.score, 72);
    assert_eq!(trend.change, "+14%");
    assert_eq!(trend.description, "Emerging trend in Hyperpop");
    assert_eq!(trend.id.len(), 16);

    let analysis = trend.ai_analysis.as_ref().unwrap();
    assert_eq!(analysis.sentiment, Sentiment::Positive);
    assert_eq!(analysis.trends, vec!["digicore"]);
}

#[tokio::test]
async fn enrichment_outage_serves_mock_trends() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trends": [{ "name": "A" }, { "name": "B" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let trends = service(&server).list_trends(None, None).await;
    let names: Vec<_> = trends.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Sustainable Fashion", "Plant-Based Alternatives"]);
}

#[tokio::test]
async fn persona_uses_seed_brands() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/persona"))
        .and(body_partial_json(json!({
            "interests": ["skate", "zines"],
            "demographics": { "age": "18-24", "region": "Europe" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "preferences": { "brands": ["Vans", "Thrasher"], "categories": ["apparel"] },
            "demographics": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(gemini_reply(
            "{\"culturalContext\": [\"DIY punk\"], \"recommendations\": [\"sponsor local events\"]}",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let form = PersonaForm {
        age_range: Some("18-24".to_string()),
        region: Some("Europe".to_string()),
        interests: Some("skate, zines".to_string()),
        ..PersonaForm::default()
    };
    let persona = service(&server).generate_persona(&form).await;

    assert_eq!(persona.age, 21);
    assert_eq!(persona.location, "London, UK");
    assert_eq!(persona.cultural_profile.brand_affinities, vec!["Vans", "Thrasher"]);
    assert_eq!(persona.cultural_profile.influences, vec!["DIY punk"]);
    assert_eq!(
        persona.ai_insights.unwrap().recommendations,
        vec!["sponsor local events"]
    );
}

#[tokio::test]
async fn empty_candidate_envelope_yields_no_insights() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let insights = service(&server)
        .get_cultural_insights(&InsightFilters::default())
        .await;
    assert!(insights.is_empty());
}
