// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        queries::articles::ArticleAssembler,
    },
    domain::{
        article::{Article, ArticleTag},
        comment::Comment,
        entity::EntityId,
        repository::Repository,
        tag::Tag,
        user::User,
    },
};

pub struct ArticleCommandService {
    pub(super) articles: Arc<dyn Repository<Article>>,
    pub(super) article_tags: Arc<dyn Repository<ArticleTag>>,
    pub(super) comments: Arc<dyn Repository<Comment>>,
    pub(super) tags: Arc<dyn Repository<Tag>>,
    pub(super) users: Arc<dyn Repository<User>>,
    pub(super) assembler: Arc<ArticleAssembler>,
}

impl ArticleCommandService {
    pub fn new(
        articles: Arc<dyn Repository<Article>>,
        article_tags: Arc<dyn Repository<ArticleTag>>,
        comments: Arc<dyn Repository<Comment>>,
        tags: Arc<dyn Repository<Tag>>,
        users: Arc<dyn Repository<User>>,
        assembler: Arc<ArticleAssembler>,
    ) -> Self {
        Self {
            articles,
            article_tags,
            comments,
            tags,
            users,
            assembler,
        }
    }

    pub(super) async fn ensure_author_exists(&self, author_id: EntityId) -> ApplicationResult<()> {
        if self.users.get_by_id(author_id).await?.is_none() {
            return Err(ApplicationError::not_found("author not found"));
        }
        Ok(())
    }
}
