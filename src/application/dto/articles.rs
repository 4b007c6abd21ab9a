use crate::domain::{article::Article, entity::Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CommentDto, TagDto, serde_time};

/// An article with its author's name, comments and tags resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub is_published: bool,
    pub content: String,
    pub author_id: String,
    /// `None` when the author record no longer exists.
    pub author_name: Option<String>,
    pub comments: Vec<CommentDto>,
    pub tags: Vec<TagDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_parts(
        article: Article,
        author_name: Option<String>,
        comments: Vec<CommentDto>,
        tags: Vec<TagDto>,
    ) -> Self {
        Self {
            id: article.id().to_string(),
            created_at: article.meta.created_at,
            updated_at: article.meta.updated_at,
            title: article.title.into_inner(),
            is_published: article.is_published,
            content: article.content.into_inner(),
            author_id: article.author_id.to_string(),
            author_name,
            comments,
            tags,
        }
    }
}
