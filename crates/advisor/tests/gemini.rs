use std::time::Duration;

use advisor::{
    Advisor, AdvisorError, AdvisorSettings, AdvisoryNote, AdvisoryRequest, BestEffortAdvisor,
    GeminiAdvisor, advisor_from_settings,
};
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use engine::{BrideProfile, GroomProfile, estimate};
use serde_json::{Value, json};

const KEY: &str = "test-key";

fn note() -> AdvisoryNote {
    AdvisoryNote {
        explanation: "The fair amount follows the income and the stated range.".to_string(),
        cultural_note: "Mahr is a gift of honour.".to_string(),
        negotiation_tip: "Talk early.".to_string(),
    }
}

fn candidate(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        == Some(KEY)
}

async fn ok(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "API key not valid" } })),
        );
    }
    if body["generationConfig"]["responseMimeType"] != "application/json" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "missing generationConfig" } })),
        );
    }
    let text = serde_json::to_string(&note()).unwrap_or_default();
    (StatusCode::OK, Json(candidate(&text)))
}

async fn malformed() -> Json<Value> {
    Json(candidate("Sorry, I cannot answer that."))
}

async fn incomplete() -> Json<Value> {
    Json(candidate(
        r#"{"explanation":"ok","culturalNote":"","negotiationTip":"tip"}"#,
    ))
}

async fn failing() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": { "message": "boom" } })),
    )
}

async fn slow(headers: HeaderMap, body: Json<Value>) -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(5)).await;
    ok(headers, body).await
}

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn stub(handler: axum::routing::MethodRouter) -> String {
    spawn_stub(Router::new().route("/v1beta/models/{*rest}", handler)).await
}

fn gemini(base_url: &str, key: &str) -> GeminiAdvisor {
    GeminiAdvisor::builder()
        .api_key(key)
        .base_url(base_url)
        .model("gemini-test")
        .build()
        .unwrap()
}

fn request() -> AdvisoryRequest {
    let groom = GroomProfile {
        monthly_income: 5000.0,
        ..Default::default()
    };
    let bride = BrideProfile {
        expected_min: 5000.0,
        expected_max: 7000.0,
        ..Default::default()
    };
    AdvisoryRequest::new(&groom, &bride, &estimate(&groom, &bride))
}

#[tokio::test]
async fn parses_note_from_first_candidate() {
    let base = stub(post(ok)).await;
    let got = gemini(&base, KEY).advise(&request()).await.unwrap();
    assert_eq!(got, note());
}

#[tokio::test]
async fn rejected_key_is_a_server_error() {
    let base = stub(post(ok)).await;
    let err = gemini(&base, "wrong").advise(&request()).await.unwrap_err();
    match err {
        AdvisorError::Server { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_text_is_malformed() {
    let base = stub(post(malformed)).await;
    let err = gemini(&base, KEY).advise(&request()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::Malformed(_)));
}

#[tokio::test]
async fn blank_field_is_incomplete() {
    let base = stub(post(incomplete)).await;
    let err = gemini(&base, KEY).advise(&request()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::Incomplete));
}

#[tokio::test]
async fn server_failure_falls_back() {
    let base = stub(post(failing)).await;
    let advisor = BestEffortAdvisor::new(gemini(&base, KEY), Duration::from_secs(5));
    assert_eq!(
        advisor.advise_or_fallback(&request()).await,
        AdvisoryNote::service_fallback()
    );
}

#[tokio::test]
async fn slow_service_falls_back() {
    let base = stub(post(slow)).await;
    let advisor = BestEffortAdvisor::new(gemini(&base, KEY), Duration::from_millis(100));
    assert_eq!(
        advisor.advise_or_fallback(&request()).await,
        AdvisoryNote::service_fallback()
    );
}

#[tokio::test]
async fn unreachable_service_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let advisor = BestEffortAdvisor::new(gemini(&base, KEY), Duration::from_secs(5));
    assert_eq!(
        advisor.advise(&request()).await.unwrap(),
        AdvisoryNote::service_fallback()
    );
}

#[tokio::test]
async fn settings_with_key_use_the_service() {
    let base = stub(post(ok)).await;
    let settings = AdvisorSettings {
        api_key: Some(KEY.to_string()),
        model: "gemini-test".to_string(),
        base_url: base,
        timeout_secs: 5,
    };
    let advisor = advisor_from_settings(&settings);
    assert_eq!(advisor.advise(&request()).await.unwrap(), note());
}
