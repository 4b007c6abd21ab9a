use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle},
        entity::EntityId,
    },
};

/// Full replacement of an article's editable fields. `tag_ids` replaces the
/// whole tag set; `author_id` keeps the current author when absent.
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub author_id: Option<String>,
    pub tag_ids: Vec<String>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = EntityId::parse(&command.id)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let author_id = command
            .author_id
            .as_deref()
            .map(EntityId::parse)
            .transpose()?;

        let mut article = self
            .articles
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if let Some(author_id) = author_id {
            if author_id != article.author_id {
                self.ensure_author_exists(author_id).await?;
                article.author_id = author_id;
            }
        }
        article.title = title;
        article.content = content;
        article.is_published = command.is_published;

        let updated = self.articles.update(article).await?;
        let tagged = self.replace_tags(id, &command.tag_ids).await?;

        tracing::debug!(article_id = %id, tags = tagged, "article updated");
        self.assembler.assemble(updated).await
    }
}
