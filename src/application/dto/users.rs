use crate::domain::{entity::Entity, user::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub picture_url: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            created_at: user.meta.created_at,
            updated_at: user.meta.updated_at,
            first_name: user.first_name.into_inner(),
            last_name: user.last_name.into_inner(),
            username: user.username.into_inner(),
            email: user.email.into(),
            picture_url: user.picture_url.into_inner(),
        }
    }
}
