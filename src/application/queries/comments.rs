// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CommentDto, PaginationResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{self, Comment},
        entity::EntityId,
        pagination::PageRequest,
        query::Filter,
        repository::Repository,
    },
};

#[derive(Debug, Default)]
pub struct ListCommentsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Restricts the listing to one article's comments.
    pub article_id: Option<String>,
}

pub struct GetCommentByIdQuery {
    pub id: String,
}

pub struct CommentQueryService {
    comments: Arc<dyn Repository<Comment>>,
}

impl CommentQueryService {
    pub fn new(comments: Arc<dyn Repository<Comment>>) -> Self {
        Self { comments }
    }

    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<PaginationResult<CommentDto>> {
        let request = PageRequest::from_params(query.page, query.per_page)?;

        let page = match query.article_id.as_deref() {
            Some(raw) => {
                let article_id = EntityId::parse(raw)?;
                self.comments
                    .get_page_where(request, Filter::eq(comment::ARTICLE_ID, article_id))
                    .await?
            }
            None => self.comments.get_all(request).await?,
        };

        Ok(PaginationResult::from_page(page, CommentDto::from))
    }

    pub async fn get_comment_by_id(&self, query: GetCommentByIdQuery) -> ApplicationResult<CommentDto> {
        let id = EntityId::parse(&query.id)?;
        self.comments
            .get_by_id(id)
            .await?
            .map(CommentDto::from)
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }
}
