// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{Article, ArticleContent, ArticleTitle},
        entity::EntityId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub author_id: String,
    pub tag_ids: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    is_published: bool,
    author_id: Option<String>,
    tag_ids: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn author_id(mut self, author_id: impl ToString) -> Self {
        self.author_id = Some(author_id.to_string());
        self
    }

    pub fn tag_id(mut self, tag_id: impl ToString) -> Self {
        self.tag_ids.push(tag_id.to_string());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            is_published: self.is_published,
            author_id: self.author_id.ok_or("author_id is required")?,
            tag_ids: self.tag_ids,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<EntityId> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let author_id = EntityId::parse(&command.author_id)?;

        self.ensure_author_exists(author_id).await?;

        let id = self
            .articles
            .create(Article::new(title, content, command.is_published, author_id))
            .await?;
        let tagged = self.attach_tags(id, &command.tag_ids).await?;

        tracing::debug!(article_id = %id, tags = tagged, "article created");
        Ok(id)
    }
}
