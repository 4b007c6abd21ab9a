// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::expect_deleted,
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        comment::{Comment, CommentMessage, CommenterName},
        entity::EntityId,
        repository::Repository,
    },
};

pub struct CreateCommentCommand {
    pub commenter_name: String,
    pub message: String,
    pub article_id: String,
}

pub struct UpdateCommentCommand {
    pub id: String,
    pub commenter_name: String,
    pub message: String,
}

pub struct DeleteCommentCommand {
    pub id: String,
}

pub struct CommentCommandService {
    comments: Arc<dyn Repository<Comment>>,
    articles: Arc<dyn Repository<Article>>,
}

impl CommentCommandService {
    pub fn new(comments: Arc<dyn Repository<Comment>>, articles: Arc<dyn Repository<Article>>) -> Self {
        Self { comments, articles }
    }

    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<EntityId> {
        let commenter_name = CommenterName::new(command.commenter_name)?;
        let message = CommentMessage::new(command.message)?;
        let article_id = EntityId::parse(&command.article_id)?;

        if self.articles.get_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let id = self
            .comments
            .create(Comment::new(commenter_name, message, article_id))
            .await?;
        tracing::debug!(comment_id = %id, %article_id, "comment created");
        Ok(id)
    }

    pub async fn update_comment(&self, command: UpdateCommentCommand) -> ApplicationResult<CommentDto> {
        let id = EntityId::parse(&command.id)?;
        let commenter_name = CommenterName::new(command.commenter_name)?;
        let message = CommentMessage::new(command.message)?;

        let mut comment = self
            .comments
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        comment.commenter_name = commenter_name;
        comment.message = message;

        let updated = self.comments.update(comment).await?;
        Ok(updated.into())
    }

    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<EntityId> {
        let id = EntityId::parse(&command.id)?;
        expect_deleted(self.comments.delete(id).await, "comment")?;
        Ok(id)
    }
}
