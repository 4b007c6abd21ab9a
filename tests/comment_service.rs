// tests/comment_service.rs
use blog_api::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    error::ApplicationError,
    queries::comments::{GetCommentByIdQuery, ListCommentsQuery},
};
use blog_api::domain::entity::EntityId;

mod support;

#[tokio::test]
async fn comments_require_an_existing_article() {
    let app = support::test_app();
    let err = app
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            commenter_name: "reader".into(),
            message: "hello?".into(),
            article_id: EntityId::generate().to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(msg) if msg == "article not found"));
}

/// Listing by article only returns that article's comments, newest update first.
#[tokio::test]
async fn list_filters_by_article() {
    let app = support::test_app();
    let author = support::seed_user(&app.services, "ada").await;
    let first = support::seed_article(&app.services, author, "First", &[]).await;
    let second = support::seed_article(&app.services, author, "Second", &[]).await;

    let a1 = support::seed_comment(&app.services, first, "a1").await;
    support::seed_comment(&app.services, second, "b1").await;
    support::seed_comment(&app.services, first, "a2").await;

    app.services
        .comment_commands
        .update_comment(UpdateCommentCommand {
            id: a1.to_string(),
            commenter_name: "editor".into(),
            message: "a1 edited".into(),
        })
        .await
        .unwrap();

    let page = app
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            page: None,
            per_page: Some(10),
            article_id: Some(first.to_string()),
        })
        .await
        .unwrap();
    assert_eq!(page.total_count, 2);
    let messages: Vec<&str> = page.results.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["a1 edited", "a2"]);
    assert!(page
        .results
        .iter()
        .all(|c| c.article_id == first.to_string()));

    let all = app
        .services
        .comment_queries
        .list_comments(ListCommentsQuery::default())
        .await
        .unwrap();
    assert_eq!(all.total_count, 3);
}

#[tokio::test]
async fn list_rejects_a_malformed_article_filter() {
    let app = support::test_app();
    let err = app
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            page: None,
            per_page: None,
            article_id: Some("nope".into()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn update_validates_and_delete_removes() {
    let app = support::test_app();
    let author = support::seed_user(&app.services, "ada").await;
    let article = support::seed_article(&app.services, author, "Post", &[]).await;
    let comment = support::seed_comment(&app.services, article, "hi").await;

    let too_long = app
        .services
        .comment_commands
        .update_comment(UpdateCommentCommand {
            id: comment.to_string(),
            commenter_name: "reader".into(),
            message: "x".repeat(1001),
        })
        .await
        .unwrap_err();
    assert!(matches!(too_long, ApplicationError::Validation(_)));

    app.services
        .comment_commands
        .delete_comment(DeleteCommentCommand {
            id: comment.to_string(),
        })
        .await
        .unwrap();

    let err = app
        .services
        .comment_queries
        .get_comment_by_id(GetCommentByIdQuery {
            id: comment.to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
