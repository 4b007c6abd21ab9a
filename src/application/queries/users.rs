use std::sync::Arc;

use crate::{
    application::{
        dto::{PaginationResult, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{entity::EntityId, pagination::PageRequest, repository::Repository, user::User},
};

#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct GetUserByIdQuery {
    pub id: String,
}

pub struct UserQueryService {
    users: Arc<dyn Repository<User>>,
}

impl UserQueryService {
    pub fn new(users: Arc<dyn Repository<User>>) -> Self {
        Self { users }
    }

    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<PaginationResult<UserDto>> {
        let request = PageRequest::from_params(query.page, query.per_page)?;
        let page = self.users.get_all(request).await?;
        Ok(PaginationResult::from_page(page, UserDto::from))
    }

    pub async fn get_user_by_id(&self, query: GetUserByIdQuery) -> ApplicationResult<UserDto> {
        let id = EntityId::parse(&query.id)?;
        self.users
            .get_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
