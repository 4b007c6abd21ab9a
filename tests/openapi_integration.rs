// tests/openapi_integration.rs
use axum::body::{self, Body};
use axum::http::{Method, Request};
use blog_api::presentation::http::openapi::{ApiDoc, docs_router};
use serde_json::Value;
use tower::ServiceExt; // for oneshot
use utoipa::OpenApi;

#[tokio::test]
async fn docs_router_serves_openapi_json() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["info"]["title"], "Blog API");
}

#[tokio::test]
async fn redoc_page_is_served() {
    let app = docs_router();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/redoc")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn every_resource_is_documented() {
    let doc = ApiDoc::openapi();
    for path in [
        "/health",
        "/api/v1/articles",
        "/api/v1/articles/{id}",
        "/api/v1/comments",
        "/api/v1/comments/{id}",
        "/api/v1/tags",
        "/api/v1/tags/{id}",
        "/api/v1/users",
        "/api/v1/users/{id}",
    ] {
        assert!(doc.paths.paths.contains_key(path), "{path} missing from OpenAPI");
    }

    let schemas = &doc.components.as_ref().unwrap().schemas;
    for name in ["ArticleDto", "CommentDto", "TagDto", "UserDto", "ErrorResponse"] {
        assert!(schemas.contains_key(name), "{name} schema missing");
    }
}
