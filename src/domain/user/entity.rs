// src/domain/user/entity.rs
use crate::domain::entity::{Entity, EntityMeta, FieldValue};
use crate::domain::user::value_objects::{Email, PersonName, PictureUrl, Username};

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const PICTURE_URL: &str = "picture_url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub meta: EntityMeta,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub username: Username,
    pub email: Email,
    pub picture_url: PictureUrl,
}

impl User {
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        username: Username,
        email: Email,
        picture_url: PictureUrl,
    ) -> Self {
        Self {
            meta: EntityMeta::unsaved(),
            first_name,
            last_name,
            username,
            email,
            picture_url,
        }
    }

    /// Name shown as an article's author.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for User {
    const KIND: &'static str = "user";
    const FIELDS: &'static [&'static str] = &[FIRST_NAME, LAST_NAME, USERNAME, EMAIL, PICTURE_URL];

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            FIRST_NAME => Some(FieldValue::text(self.first_name.as_str())),
            LAST_NAME => Some(FieldValue::text(self.last_name.as_str())),
            USERNAME => Some(FieldValue::text(self.username.as_str())),
            EMAIL => Some(FieldValue::text(self.email.as_str())),
            PICTURE_URL => Some(FieldValue::text(self.picture_url.as_str())),
            _ => None,
        }
    }
}
