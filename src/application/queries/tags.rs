// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{PaginationResult, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{entity::EntityId, pagination::PageRequest, repository::Repository, tag::Tag},
};

#[derive(Debug, Default)]
pub struct ListTagsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct GetTagByIdQuery {
    pub id: String,
}

pub struct TagQueryService {
    tags: Arc<dyn Repository<Tag>>,
}

impl TagQueryService {
    pub fn new(tags: Arc<dyn Repository<Tag>>) -> Self {
        Self { tags }
    }

    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<PaginationResult<TagDto>> {
        let request = PageRequest::from_params(query.page, query.per_page)?;
        let page = self.tags.get_all(request).await?;
        Ok(PaginationResult::from_page(page, TagDto::from))
    }

    pub async fn get_tag_by_id(&self, query: GetTagByIdQuery) -> ApplicationResult<TagDto> {
        let id = EntityId::parse(&query.id)?;
        self.tags
            .get_by_id(id)
            .await?
            .map(TagDto::from)
            .ok_or_else(|| ApplicationError::not_found("tag not found"))
    }
}
