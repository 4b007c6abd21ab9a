// src/domain/tag.rs
use crate::domain::entity::{Entity, EntityMeta, FieldValue};
use crate::domain::text::bounded_text;

bounded_text!(
    /// Unique across all tags.
    TagName,
    "tag name",
    32
);

pub const NAME: &str = "name";

/// Error message reported when a tag name is already taken.
pub const TAG_EXISTS: &str = "TAG_EXISTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub meta: EntityMeta,
    pub name: TagName,
}

impl Tag {
    pub fn new(name: TagName) -> Self {
        Self {
            meta: EntityMeta::unsaved(),
            name,
        }
    }

    pub fn rename(&mut self, name: TagName) {
        self.name = name;
    }
}

impl Entity for Tag {
    const KIND: &'static str = "tag";
    const FIELDS: &'static [&'static str] = &[NAME];

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            NAME => Some(FieldValue::text(self.name.as_str())),
            _ => None,
        }
    }
}
