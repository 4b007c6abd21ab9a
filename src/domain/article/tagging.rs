// src/domain/article/tagging.rs
//! Join record for the article <-> tag association.

use crate::domain::entity::{Entity, EntityId, EntityMeta, FieldValue};

pub const ARTICLE_ID: &str = "article_id";
pub const TAG_ID: &str = "tag_id";

/// One edge between an article and a tag. `(article_id, tag_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTag {
    pub meta: EntityMeta,
    pub article_id: EntityId,
    pub tag_id: EntityId,
}

impl ArticleTag {
    pub fn new(article_id: EntityId, tag_id: EntityId) -> Self {
        Self {
            meta: EntityMeta::unsaved(),
            article_id,
            tag_id,
        }
    }
}

impl Entity for ArticleTag {
    const KIND: &'static str = "article tag";
    const FIELDS: &'static [&'static str] = &[ARTICLE_ID, TAG_ID];

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            ARTICLE_ID => Some(FieldValue::Id(self.article_id)),
            TAG_ID => Some(FieldValue::Id(self.tag_id)),
            _ => None,
        }
    }
}
