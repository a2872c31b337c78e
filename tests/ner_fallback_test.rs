//! Tests for the external entity source: merging, filtering, and the
//! pattern-only degrade when the source fails

use veil::analysis::AnalysisEngine;
use veil::config::{EngineConfig, NerConfig};
use veil::domain::{EntityFilter, EntityType};

fn engine_with_ner(base_url: &str) -> AnalysisEngine {
    let config = EngineConfig {
        ner: NerConfig {
            enabled: true,
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            username: None,
            password: None,
        },
        ..Default::default()
    };
    AnalysisEngine::new(config).expect("Failed to create engine")
}

#[tokio::test]
async fn test_model_entities_merge_with_pattern_matches() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"entities": [{"entity_type": "PERSON", "start": 0, "end": 10, "score": 0.85}]}"#,
        )
        .expect_at_least(1)
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let text = "Jan Visser heeft BSN 123456782";

    let matches = engine.analyze(text, &EntityFilter::All).await;
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].entity, EntityType::Person);
    assert_eq!(matches[0].text, "Jan Visser");
    assert_eq!(matches[1].entity, EntityType::NationalId);

    let redacted = engine.redact(text, &EntityFilter::All).await;
    assert_eq!(redacted, "[NAAM] heeft BSN [BSN]");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_degrades_to_pattern_only() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let text = "Jan Visser heeft BSN 123456782";

    // The pattern match survives; the failed source contributes nothing
    let matches = engine.analyze(text, &EntityFilter::All).await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entity, EntityType::NationalId);

    let redacted = engine.redact(text, &EntityFilter::All).await;
    assert_eq!(redacted, "Jan Visser heeft BSN [BSN]");
}

#[tokio::test]
async fn test_unreachable_source_degrades_to_pattern_only() {
    // Nothing listens on this port
    let engine = engine_with_ner("http://127.0.0.1:9");
    let text = "BSN nummer is 123456782";

    let redacted = engine.redact(text, &EntityFilter::All).await;
    assert_eq!(redacted, "BSN nummer is [BSN]");
}

#[tokio::test]
async fn test_malformed_payload_degrades_to_pattern_only() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let matches = engine
        .analyze("BSN nummer is 123456782", &EntityFilter::All)
        .await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entity, EntityType::NationalId);
}

#[tokio::test]
async fn test_empty_model_response_is_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"entities": []}"#)
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let matches = engine
        .analyze("alleen een naam: Jan", &EntityFilter::All)
        .await;
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_out_of_range_model_span_dropped() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"entities": [{"entity_type": "PERSON", "start": 0, "end": 999, "score": 0.85}]}"#,
        )
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let text = "korte tekst";
    let matches = engine.analyze(text, &EntityFilter::All).await;
    assert!(matches.is_empty());

    let redacted = engine.redact(text, &EntityFilter::All).await;
    assert_eq!(redacted, text);
}

#[tokio::test]
async fn test_unknown_model_label_redacts_to_generic_token() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"entities": [{"entity_type": "NRP", "start": 0, "end": 9, "score": 0.7}]}"#,
        )
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let text = "Nederland is mooi";

    let redacted = engine.redact(text, &EntityFilter::All).await;
    assert_eq!(redacted, "[PII] is mooi");
}

#[tokio::test]
async fn test_filter_applies_to_model_entities() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"entities": [{"entity_type": "PERSON", "start": 0, "end": 10, "score": 0.85}]}"#,
        )
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let text = "Jan Visser heeft BSN 123456782";

    let filter = EntityFilter::only([EntityType::NationalId]);
    let matches = engine.analyze(text, &filter).await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entity, EntityType::NationalId);
}

#[tokio::test]
async fn test_model_and_pattern_overlap_resolved_by_score() {
    let mut server = mockito::Server::new_async().await;
    // The model claims the digits are a date with a higher score than the
    // plain-BSN base score would have; the validated BSN still wins on 0.9
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"entities": [{"entity_type": "DATE_TIME", "start": 7, "end": 16, "score": 0.6}]}"#,
        )
        .create_async()
        .await;

    let engine = engine_with_ner(&server.url());
    let text = "cijfer 123456782";

    let matches = engine.analyze(text, &EntityFilter::All).await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entity, EntityType::NationalId);
    assert!((matches[0].score - 0.9).abs() < f32::EPSILON);
}
