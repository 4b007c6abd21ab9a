// src/domain/comment.rs
use crate::domain::entity::{Entity, EntityId, EntityMeta, FieldValue};
use crate::domain::text::bounded_text;

bounded_text!(CommenterName, "commenter name", 32);
bounded_text!(CommentMessage, "message", 1000);

pub const COMMENTER_NAME: &str = "commenter_name";
pub const MESSAGE: &str = "message";
pub const ARTICLE_ID: &str = "article_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub meta: EntityMeta,
    pub commenter_name: CommenterName,
    pub message: CommentMessage,
    pub article_id: EntityId,
}

impl Comment {
    pub fn new(commenter_name: CommenterName, message: CommentMessage, article_id: EntityId) -> Self {
        Self {
            meta: EntityMeta::unsaved(),
            commenter_name,
            message,
            article_id,
        }
    }
}

impl Entity for Comment {
    const KIND: &'static str = "comment";
    const FIELDS: &'static [&'static str] = &[COMMENTER_NAME, MESSAGE, ARTICLE_ID];

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            COMMENTER_NAME => Some(FieldValue::text(self.commenter_name.as_str())),
            MESSAGE => Some(FieldValue::text(self.message.as_str())),
            ARTICLE_ID => Some(FieldValue::Id(self.article_id)),
            _ => None,
        }
    }
}
