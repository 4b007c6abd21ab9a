// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleTitle};
use crate::domain::entity::{Entity, EntityId, EntityMeta, FieldValue};

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";
pub const IS_PUBLISHED: &str = "is_published";
pub const AUTHOR_ID: &str = "author_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub meta: EntityMeta,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub is_published: bool,
    pub author_id: EntityId,
}

impl Article {
    pub fn new(
        title: ArticleTitle,
        content: ArticleContent,
        is_published: bool,
        author_id: EntityId,
    ) -> Self {
        Self {
            meta: EntityMeta::unsaved(),
            title,
            content,
            is_published,
            author_id,
        }
    }
}

impl Entity for Article {
    const KIND: &'static str = "article";
    const FIELDS: &'static [&'static str] = &[TITLE, CONTENT, IS_PUBLISHED, AUTHOR_ID];

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            TITLE => Some(FieldValue::text(self.title.as_str())),
            CONTENT => Some(FieldValue::text(self.content.as_str())),
            IS_PUBLISHED => Some(FieldValue::Bool(self.is_published)),
            AUTHOR_ID => Some(FieldValue::Id(self.author_id)),
            _ => None,
        }
    }
}
