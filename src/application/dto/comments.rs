use crate::domain::{comment::Comment, entity::Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: String,
    pub commenter_name: String,
    pub message: String,
    pub article_id: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id().to_string(),
            created_at: comment.meta.created_at,
            updated_at: comment.meta.updated_at,
            commenter_name: comment.commenter_name.into_inner(),
            message: comment.message.into_inner(),
            article_id: comment.article_id.to_string(),
        }
    }
}
