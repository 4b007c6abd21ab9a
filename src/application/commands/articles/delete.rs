use super::ArticleCommandService;
use crate::{
    application::{
        commands::{cascade::remove_matching, expect_deleted},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment, entity::EntityId, query::Filter},
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Removes the article's tag edges and comments first, then the article itself.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<EntityId> {
        let id = EntityId::parse(&command.id)?;
        if self.articles.get_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let detached = self.detach_all_tags(id).await?;
        let comments_removed =
            remove_matching(self.comments.as_ref(), Filter::eq(comment::ARTICLE_ID, id)).await?;

        expect_deleted(self.articles.delete(id).await, "article")?;

        tracing::debug!(article_id = %id, detached, comments_removed, "article deleted");
        Ok(id)
    }
}
