use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::api::{build_router, ServerState};
use crate::backends::gemini::Gemini;

fn router_with_base(base_url: &str) -> Router {
    let gemini = Gemini::new("test-key", Some(base_url.to_string()), None).unwrap();
    build_router(ServerState { gemini })
}

/// Router backed by an address nothing listens on; only valid for requests
/// rejected before any upstream call.
fn offline_router() -> Router {
    router_with_base("http://127.0.0.1:1/")
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn root_returns_identification_payload() {
    let response = offline_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["message"], "AI Agent Evaluation Dashboard API");
}

#[tokio::test]
async fn evaluate_rejects_k_of_zero_before_any_upstream_call() {
    let response = offline_router()
        .oneshot(post_json(
            "/evaluate",
            r#"{"task": "Say hello", "expected_output": "hello", "k": 0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "k must be between 1 and 10");
}

#[tokio::test]
async fn evaluate_rejects_k_above_ten() {
    let response = offline_router()
        .oneshot(post_json(
            "/evaluate",
            r#"{"task": "Say hello", "expected_output": "hello", "k": 11}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn evaluate_rejects_blank_task() {
    let response = offline_router()
        .oneshot(post_json(
            "/evaluate",
            r#"{"task": "   ", "expected_output": "hello", "k": 3}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "task cannot be empty");
}

#[tokio::test]
async fn ab_test_rejects_runs_per_model_out_of_range() {
    let response = offline_router()
        .oneshot(post_json(
            "/ab-test",
            r#"{"task": "Say hello", "runs_per_model": 0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response).await,
        "runs_per_model must be between 1 and 10"
    );
}

#[tokio::test]
async fn evaluate_returns_report_for_single_run() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "candidates": [{"content": {"parts": [{"text": "Hello there!"}]}}],
                "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 4}
            }"#,
        )
        .create_async()
        .await;

    let response = router_with_base(&server.url())
        .oneshot(post_json(
            "/evaluate",
            r#"{"task": "Say hello", "expected_output": "hello", "k": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["pass_at_k"], 100.0);
    assert_eq!(body["success_rate"], 100.0);
    assert_eq!(body["total_runs"], 1);
    assert_eq!(body["runs"][0]["run_number"], 1);
    assert_eq!(body["runs"][0]["success"], true);
    assert_eq!(body["runs"][0]["token_count"], 7);
}

#[tokio::test]
async fn ab_test_maps_upstream_failure_to_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-1.5-flash-8b:generateContent")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let response = router_with_base(&server.url())
        .oneshot(post_json(
            "/ab-test",
            r#"{"task": "Say hello", "runs_per_model": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("Error testing model Gemini 1.5 Flash 8B (Fast):"));
    assert!(body.contains("upstream exploded"));
}

#[tokio::test]
async fn evaluate_maps_upstream_failure_to_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let response = router_with_base(&server.url())
        .oneshot(post_json(
            "/evaluate",
            r#"{"task": "Say hello", "expected_output": "hello", "k": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("Error during evaluation:"));
    assert!(body.contains("upstream exploded"));
}
