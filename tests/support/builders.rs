// tests/support/builders.rs
use blog_api::application::{
    commands::{
        articles::CreateArticleCommand, comments::CreateCommentCommand, tags::CreateTagCommand,
        users::CreateUserCommand,
    },
    services::ApplicationServices,
};
use blog_api::domain::entity::EntityId;

pub fn user_command(username: &str) -> CreateUserCommand {
    CreateUserCommand {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        username: username.into(),
        email: format!("{username}@example.com"),
        picture_url: format!("https://example.com/{username}.png"),
    }
}

pub async fn seed_user(services: &ApplicationServices, username: &str) -> EntityId {
    services
        .user_commands
        .create_user(user_command(username))
        .await
        .expect("seed user")
}

pub async fn seed_tag(services: &ApplicationServices, name: &str) -> EntityId {
    services
        .tag_commands
        .create_tag(CreateTagCommand { name: name.into() })
        .await
        .expect("seed tag")
}

pub async fn seed_article(
    services: &ApplicationServices,
    author_id: EntityId,
    title: &str,
    tag_ids: &[EntityId],
) -> EntityId {
    let mut builder = CreateArticleCommand::builder()
        .title(title)
        .content("Lorem ipsum dolor sit amet")
        .published(true)
        .author_id(author_id);
    for tag_id in tag_ids {
        builder = builder.tag_id(tag_id);
    }
    services
        .article_commands
        .create_article(builder.build().expect("complete article command"))
        .await
        .expect("seed article")
}

pub async fn seed_comment(
    services: &ApplicationServices,
    article_id: EntityId,
    message: &str,
) -> EntityId {
    services
        .comment_commands
        .create_comment(CreateCommentCommand {
            commenter_name: "reader".into(),
            message: message.into(),
            article_id: article_id.to_string(),
        })
        .await
        .expect("seed comment")
}
