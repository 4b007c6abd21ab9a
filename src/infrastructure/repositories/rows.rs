// src/infrastructure/repositories/rows.rs
//! Row shapes for each table and their conversion into domain entities.

use super::postgres::PgEntity;
use crate::domain::{
    article::{Article, ArticleContent, ArticleTag, ArticleTitle},
    comment::{Comment, CommentMessage, CommenterName},
    entity::{EntityId, EntityMeta},
    errors::{DomainError, DomainResult},
    tag::{Tag, TagName},
    user::{Email, PersonName, PictureUrl, User, Username},
};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

fn meta(id: Uuid, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> EntityMeta {
    EntityMeta {
        id: EntityId::from(id),
        created_at,
        updated_at,
    }
}

#[derive(Debug, FromRow)]
pub struct ArticleRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    content: String,
    is_published: bool,
    author_id: Uuid,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            meta: meta(row.id, row.created_at, row.updated_at),
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            is_published: row.is_published,
            author_id: EntityId::from(row.author_id),
        })
    }
}

impl PgEntity for Article {
    const TABLE: &'static str = "articles";
    type Row = ArticleRow;

    fn from_row(row: Self::Row) -> DomainResult<Self> {
        Self::try_from(row)
    }
}

#[derive(Debug, FromRow)]
pub struct ArticleTagRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    article_id: Uuid,
    tag_id: Uuid,
}

impl From<ArticleTagRow> for ArticleTag {
    fn from(row: ArticleTagRow) -> Self {
        ArticleTag {
            meta: meta(row.id, row.created_at, row.updated_at),
            article_id: EntityId::from(row.article_id),
            tag_id: EntityId::from(row.tag_id),
        }
    }
}

impl PgEntity for ArticleTag {
    const TABLE: &'static str = "article_tags";
    type Row = ArticleTagRow;

    fn from_row(row: Self::Row) -> DomainResult<Self> {
        Ok(row.into())
    }
}

#[derive(Debug, FromRow)]
pub struct CommentRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    commenter_name: String,
    message: String,
    article_id: Uuid,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            meta: meta(row.id, row.created_at, row.updated_at),
            commenter_name: CommenterName::new(row.commenter_name)?,
            message: CommentMessage::new(row.message)?,
            article_id: EntityId::from(row.article_id),
        })
    }
}

impl PgEntity for Comment {
    const TABLE: &'static str = "comments";
    type Row = CommentRow;

    fn from_row(row: Self::Row) -> DomainResult<Self> {
        Self::try_from(row)
    }
}

#[derive(Debug, FromRow)]
pub struct TagRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            meta: meta(row.id, row.created_at, row.updated_at),
            name: TagName::new(row.name)?,
        })
    }
}

impl PgEntity for Tag {
    const TABLE: &'static str = "tags";
    type Row = TagRow;

    fn from_row(row: Self::Row) -> DomainResult<Self> {
        Self::try_from(row)
    }
}

#[derive(Debug, FromRow)]
pub struct UserRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    picture_url: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            meta: meta(row.id, row.created_at, row.updated_at),
            first_name: PersonName::new(row.first_name)?,
            last_name: PersonName::new(row.last_name)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            picture_url: PictureUrl::new(row.picture_url)?,
        })
    }
}

impl PgEntity for User {
    const TABLE: &'static str = "users";
    type Row = UserRow;

    fn from_row(row: Self::Row) -> DomainResult<Self> {
        Self::try_from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_stored_values_surface_as_validation_errors() {
        let now = Utc::now();
        let row = TagRow {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: "   ".into(),
        };
        assert!(matches!(Tag::from_row(row), Err(DomainError::Validation(_))));
    }

    #[test]
    fn article_row_keeps_identity_and_timestamps() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let author = Uuid::new_v4();
        let article = Article::from_row(ArticleRow {
            id,
            created_at: now,
            updated_at: now,
            title: "Hello".into(),
            content: "World".into(),
            is_published: true,
            author_id: author,
        })
        .unwrap();
        assert_eq!(article.meta.id.as_uuid(), id);
        assert_eq!(article.author_id.as_uuid(), author);
        assert!(article.is_published);
    }
}
