use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PaginationResult},
        error::ApplicationResult,
    },
    domain::pagination::{Page, PageRequest},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginationResult<ArticleDto>> {
        let request = PageRequest::from_params(query.page, query.per_page)?;
        let page = self.articles.get_all(request).await?;

        let Page {
            total_count,
            results,
            per_page,
            page_number,
        } = page;
        let results = self.assembler.assemble_all(results).await?;

        Ok(PaginationResult::from(Page {
            total_count,
            results,
            per_page,
            page_number,
        }))
    }
}
