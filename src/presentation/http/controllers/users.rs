// src/presentation/http/controllers/users.rs
use super::{CreatedResponse, DeletedResponse, PageParams, created, deleted};
use crate::application::{
    commands::users::{CreateUserCommand, DeleteUserCommand, UpdateUserCommand},
    dto::UserDto,
    queries::users::{GetUserByIdQuery, ListUsersQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::openapi::UserListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub picture_url: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(PageParams),
    responses(
        (status = 200, description = "One page of users.", body = UserListResponse),
        (status = 400, description = "Invalid paging parameters.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> HttpResult<Json<UserListResponse>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User.", body = UserDto),
        (status = 404, description = "User not found.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user_by_id(GetUserByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created.", body = CreatedResponse),
        (status = 400, description = "Invalid user.", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<UserRequest>,
) -> HttpResult<(StatusCode, Json<CreatedResponse>)> {
    let command = CreateUserCommand {
        first_name: payload.first_name,
        last_name: payload.last_name,
        username: payload.username,
        email: payload.email,
        picture_url: payload.picture_url,
    };

    state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()
        .map(created)
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user.", body = UserDto),
        (status = 400, description = "Invalid user.", body = ErrorResponse),
        (status = 404, description = "User not found.", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateUserCommand {
        id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        username: payload.username,
        email: payload.email,
        picture_url: payload.picture_url,
    };

    state
        .services
        .user_commands
        .update_user(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted.", body = DeletedResponse),
        (status = 404, description = "User not found.", body = ErrorResponse),
        (status = 409, description = "User still authors articles.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { id })
        .await
        .into_http()
        .map(deleted)
}
