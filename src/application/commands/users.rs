use std::sync::Arc;

use crate::{
    application::{
        commands::expect_deleted,
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, entity::AUTHOR_ID},
        entity::EntityId,
        query::{Filter, OrderKey},
        repository::Repository,
        user::{Email, PersonName, PictureUrl, User, Username},
    },
};

pub struct CreateUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub picture_url: String,
}

pub struct UpdateUserCommand {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub picture_url: String,
}

pub struct DeleteUserCommand {
    pub id: String,
}

struct UserFields {
    first_name: PersonName,
    last_name: PersonName,
    username: Username,
    email: Email,
    picture_url: PictureUrl,
}

impl UserFields {
    fn parse(
        first_name: String,
        last_name: String,
        username: String,
        email: String,
        picture_url: String,
    ) -> ApplicationResult<Self> {
        Ok(Self {
            first_name: PersonName::new(first_name)?,
            last_name: PersonName::new(last_name)?,
            username: Username::new(username)?,
            email: Email::new(email)?,
            picture_url: PictureUrl::new(picture_url)?,
        })
    }
}

pub struct UserCommandService {
    users: Arc<dyn Repository<User>>,
    articles: Arc<dyn Repository<Article>>,
}

impl UserCommandService {
    pub fn new(users: Arc<dyn Repository<User>>, articles: Arc<dyn Repository<Article>>) -> Self {
        Self { users, articles }
    }

    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<EntityId> {
        let fields = UserFields::parse(
            command.first_name,
            command.last_name,
            command.username,
            command.email,
            command.picture_url,
        )?;

        let id = self
            .users
            .create(User::new(
                fields.first_name,
                fields.last_name,
                fields.username,
                fields.email,
                fields.picture_url,
            ))
            .await?;
        tracing::debug!(user_id = %id, "user created");
        Ok(id)
    }

    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let id = EntityId::parse(&command.id)?;
        let fields = UserFields::parse(
            command.first_name,
            command.last_name,
            command.username,
            command.email,
            command.picture_url,
        )?;

        let mut user = self
            .users
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        user.first_name = fields.first_name;
        user.last_name = fields.last_name;
        user.username = fields.username;
        user.email = fields.email;
        user.picture_url = fields.picture_url;

        let updated = self.users.update(user).await?;
        Ok(updated.into())
    }

    /// Users who still author articles cannot be removed.
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<EntityId> {
        let id = EntityId::parse(&command.id)?;
        let authored = self
            .articles
            .get_first_where(Filter::eq(AUTHOR_ID, id), OrderKey::CreatedAt)
            .await?;
        if authored.is_some() {
            return Err(ApplicationError::conflict("user still authors articles"));
        }

        expect_deleted(self.users.delete(id).await, "user")?;
        Ok(id)
    }
}
