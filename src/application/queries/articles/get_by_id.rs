use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::entity::EntityId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let id = EntityId::parse(&query.id)?;
        let article = self
            .articles
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.assembler.assemble(article).await
    }
}
