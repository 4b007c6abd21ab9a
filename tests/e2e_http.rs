// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

use support::send;

fn user_body(username: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "username": username,
        "email": format!("{username}@example.com"),
        "picture_url": "https://example.com/ada.png"
    })
}

async fn create(router: &axum::Router, uri: &str, body: Value) -> String {
    let (status, json) = send(router, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
    json["id"].as_str().expect("created id").to_string()
}

#[tokio::test]
async fn health_returns_ok() {
    let (router, _) = support::make_test_router();
    let (status, json) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let direct = blog_api::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

/// Full article flow: author, tags, article, comment, then read it back.
#[tokio::test]
async fn article_crud_round_trip() {
    let (router, _) = support::make_test_router();
    let author = create(&router, "/api/v1/users", user_body("ada")).await;
    let tag = create(&router, "/api/v1/tags", json!({ "name": "rust" })).await;

    let article = create(
        &router,
        "/api/v1/articles",
        json!({
            "title": "Hello",
            "content": "World",
            "is_published": true,
            "author_id": author,
            "tag_ids": [tag]
        }),
    )
    .await;
    create(
        &router,
        "/api/v1/comments",
        json!({ "commenter_name": "reader", "message": "nice", "article_id": article }),
    )
    .await;

    let (status, json) = send(
        &router,
        Method::GET,
        &format!("/api/v1/articles/{article}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Hello");
    assert_eq!(json["author_name"], "Ada Lovelace");
    assert_eq!(json["tags"][0]["name"], "rust");
    assert_eq!(json["comments"][0]["message"], "nice");
    assert!(json["created_at"].as_str().unwrap().ends_with('Z'));

    let (status, json) = send(
        &router,
        Method::PUT,
        &format!("/api/v1/articles/{article}"),
        Some(json!({ "title": "Hello again", "content": "World", "tag_ids": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Hello again");
    assert_eq!(json["tags"], json!([]));

    let (status, json) = send(&router, Method::GET, "/api/v1/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_count"], 1);
    assert_eq!(json["results_per_page"], 3);
    assert_eq!(json["page_number"], 1);
    assert_eq!(json["total_pages"], 1);

    let (status, json) = send(
        &router,
        Method::DELETE,
        &format!("/api/v1/articles/{article}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], article);
    assert_eq!(json["status"], "deleted");
}

#[tokio::test]
async fn duplicate_tag_returns_409() {
    let (router, _) = support::make_test_router();
    create(&router, "/api/v1/tags", json!({ "name": "rust" })).await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/tags")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": "rust" }).to_string()))
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn malformed_id_returns_400() {
    let (router, _) = support::make_test_router();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/tags/not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn missing_entity_returns_404() {
    let (router, _) = support::make_test_router();
    let id = blog_api::domain::entity::EntityId::generate();
    for path in ["articles", "comments", "tags", "users"] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(format!("/api/v1/{path}/{id}"))
            .body(Body::empty())
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    }
}

#[tokio::test]
async fn out_of_range_paging_returns_400() {
    let (router, _) = support::make_test_router();
    for uri in ["/api/v1/users?per_page=0", "/api/v1/users?per_page=101", "/api/v1/users?page=0"] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    }
}

#[tokio::test]
async fn article_with_unknown_author_returns_404() {
    let (router, _) = support::make_test_router();
    let (status, json) = send(
        &router,
        Method::POST,
        "/api/v1/articles",
        Some(json!({
            "title": "Orphan",
            "content": "Body",
            "author_id": blog_api::domain::entity::EntityId::generate().to_string()
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "author not found");
}

#[tokio::test]
async fn comments_can_be_filtered_by_article_over_http() {
    let (router, _) = support::make_test_router();
    let author = create(&router, "/api/v1/users", user_body("ada")).await;
    let article_body = |title: &str| {
        json!({ "title": title, "content": "Body", "author_id": author.clone() })
    };
    let first = create(&router, "/api/v1/articles", article_body("First")).await;
    let second = create(&router, "/api/v1/articles", article_body("Second")).await;
    for (article, message) in [(&first, "one"), (&second, "two"), (&first, "three")] {
        create(
            &router,
            "/api/v1/comments",
            json!({ "commenter_name": "reader", "message": message, "article_id": article }),
        )
        .await;
    }

    let (status, json) = send(
        &router,
        Method::GET,
        &format!("/api/v1/comments?article_id={first}&per_page=10"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_count"], 2);
    assert_eq!(json["results"][0]["message"], "three");
    assert_eq!(json["results"][1]["message"], "one");
}

#[tokio::test]
async fn deleting_an_author_returns_409_until_their_articles_go() {
    let (router, _) = support::make_test_router();
    let author = create(&router, "/api/v1/users", user_body("ada")).await;
    let article = create(
        &router,
        "/api/v1/articles",
        json!({ "title": "Mine", "content": "Body", "author_id": author }),
    )
    .await;
    create(
        &router,
        "/api/v1/comments",
        json!({ "commenter_name": "reader", "message": "hi", "article_id": article }),
    )
    .await;

    let (status, json) = send(
        &router,
        Method::DELETE,
        &format!("/api/v1/users/{author}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "user still authors articles");

    let (status, _) = send(
        &router,
        Method::DELETE,
        &format!("/api/v1/articles/{article}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&router, Method::GET, "/api/v1/comments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_count"], 0);
    assert_eq!(json["total_pages"], 0);

    let (status, _) = send(
        &router,
        Method::DELETE,
        &format!("/api/v1/users/{author}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn extractor_rejections_use_the_error_body() {
    let (router, _) = support::make_test_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users?page=abc")
        .body(Body::empty())
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/tags")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "label": "rust" }).to_string()))
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    support::assert_error_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/tags")
        .body(Body::from("name=rust"))
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    support::assert_error_response(
        resp,
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        "Unsupported Media Type",
    )
    .await;
}
