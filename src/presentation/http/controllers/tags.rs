// src/presentation/http/controllers/tags.rs
use super::{CreatedResponse, DeletedResponse, PageParams, created, deleted};
use crate::application::{
    commands::tags::{CreateTagCommand, DeleteTagCommand, UpdateTagCommand},
    dto::TagDto,
    queries::tags::{GetTagByIdQuery, ListTagsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::openapi::TagListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TagRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    params(PageParams),
    responses(
        (status = 200, description = "One page of tags.", body = TagListResponse),
        (status = 400, description = "Invalid paging parameters.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> HttpResult<Json<TagListResponse>> {
    state
        .services
        .tag_queries
        .list_tags(ListTagsQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{id}",
    params(("id" = String, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag.", body = TagDto),
        (status = 404, description = "Tag not found.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .tag_queries
        .get_tag_by_id(GetTagByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = TagRequest,
    responses(
        (status = 201, description = "Tag created.", body = CreatedResponse),
        (status = 400, description = "Invalid tag name.", body = ErrorResponse),
        (status = 409, description = "A tag with this name exists (TAG_EXISTS).", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<TagRequest>,
) -> HttpResult<(StatusCode, Json<CreatedResponse>)> {
    state
        .services
        .tag_commands
        .create_tag(CreateTagCommand { name: payload.name })
        .await
        .into_http()
        .map(created)
}

#[utoipa::path(
    put,
    path = "/api/v1/tags/{id}",
    params(("id" = String, Path, description = "Tag id")),
    request_body = TagRequest,
    responses(
        (status = 200, description = "Renamed tag.", body = TagDto),
        (status = 404, description = "Tag not found.", body = ErrorResponse),
        (status = 409, description = "Another tag has this name (TAG_EXISTS).", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<TagRequest>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .tag_commands
        .update_tag(UpdateTagCommand {
            id,
            name: payload.name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/tags/{id}",
    params(("id" = String, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag deleted and detached from its articles.", body = DeletedResponse),
        (status = 404, description = "Tag not found.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .tag_commands
        .delete_tag(DeleteTagCommand { id })
        .await
        .into_http()
        .map(deleted)
}
