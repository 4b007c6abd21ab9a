// tests/support/helpers.rs
use super::clock::SteppingClock;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use blog_api::application::{
    ports::time::Clock,
    services::{ApplicationServices, Repositories},
};
use blog_api::infrastructure::repositories::in_memory_repositories;
use blog_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub repos: Repositories,
}

/// Services over in-memory stores driven by `clock`.
pub fn test_app_with_clock(clock: Arc<dyn Clock>) -> TestApp {
    let repos = in_memory_repositories(&clock);
    let services = Arc::new(ApplicationServices::new(repos.clone()));
    TestApp { services, repos }
}

pub fn test_app() -> TestApp {
    test_app_with_clock(Arc::new(SteppingClock::new()))
}

pub fn make_test_router() -> (axum::Router, TestApp) {
    let app = test_app();
    let state = HttpState {
        services: Arc::clone(&app.services),
    };
    let router = build_router(state, &["http://localhost:8080".to_string()]);
    (router, app)
}

/// Sends one request and returns the status plus the decoded JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    router: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
