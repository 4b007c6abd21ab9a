// tests/user_service.rs
use blog_api::application::{
    commands::{
        articles::DeleteArticleCommand,
        users::{DeleteUserCommand, UpdateUserCommand},
    },
    error::ApplicationError,
    queries::users::{GetUserByIdQuery, ListUsersQuery},
};
use blog_api::domain::entity::EntityId;

mod support;

#[tokio::test]
async fn create_then_get_returns_every_field() {
    let app = support::test_app();
    let id = support::seed_user(&app.services, "ada").await;

    let user = app
        .services
        .user_queries
        .get_user_by_id(GetUserByIdQuery { id: id.to_string() })
        .await
        .unwrap();
    assert_eq!(user.id, id.to_string());
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.picture_url, "https://example.com/ada.png");
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = support::test_app();
    let mut command = support::user_command("bob");
    command.email = "not an email".into();

    let err = app
        .services
        .user_commands
        .create_user(command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn update_rewrites_fields_and_keeps_creation_time() {
    let app = support::test_app();
    let id = support::seed_user(&app.services, "ada").await;
    let before = app
        .services
        .user_queries
        .get_user_by_id(GetUserByIdQuery { id: id.to_string() })
        .await
        .unwrap();

    let updated = app
        .services
        .user_commands
        .update_user(UpdateUserCommand {
            id: id.to_string(),
            first_name: "Augusta".into(),
            last_name: "King".into(),
            username: "augusta".into(),
            email: "augusta@example.com".into(),
            picture_url: "https://example.com/augusta.png".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.username, "augusta");
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at > before.updated_at);
}

#[tokio::test]
async fn missing_users_are_not_found() {
    let app = support::test_app();
    let id = EntityId::generate().to_string();

    let get = app
        .services
        .user_queries
        .get_user_by_id(GetUserByIdQuery { id: id.clone() })
        .await
        .unwrap_err();
    assert!(matches!(get, ApplicationError::NotFound(_)));

    let delete = app
        .services
        .user_commands
        .delete_user(DeleteUserCommand { id })
        .await
        .unwrap_err();
    assert!(matches!(delete, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn author_cannot_be_deleted_while_articles_remain() {
    let app = support::test_app();
    let author = support::seed_user(&app.services, "ada").await;
    let article = support::seed_article(&app.services, author, "Mine", &[]).await;

    let refused = app
        .services
        .user_commands
        .delete_user(DeleteUserCommand {
            id: author.to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(refused, ApplicationError::Conflict(_)));
    assert!(
        app.services
            .user_queries
            .get_user_by_id(GetUserByIdQuery {
                id: author.to_string(),
            })
            .await
            .is_ok()
    );

    app.services
        .article_commands
        .delete_article(DeleteArticleCommand {
            id: article.to_string(),
        })
        .await
        .unwrap();
    let deleted = app
        .services
        .user_commands
        .delete_user(DeleteUserCommand {
            id: author.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(deleted, author);
}

#[tokio::test]
async fn list_reports_total_and_page_metadata() {
    let app = support::test_app();
    for name in ["a", "b", "c", "d"] {
        support::seed_user(&app.services, name).await;
    }

    let page = app
        .services
        .user_queries
        .list_users(ListUsersQuery {
            page: Some(2),
            per_page: Some(3),
        })
        .await
        .unwrap();
    assert_eq!(page.total_count, 4);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.results_per_page, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].username, "a");
}
