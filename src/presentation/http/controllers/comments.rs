// src/presentation/http/controllers/comments.rs
use super::{CreatedResponse, DeletedResponse, created, deleted};
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::CommentDto,
    queries::comments::{GetCommentByIdQuery, ListCommentsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::openapi::CommentListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Only comments on this article.
    pub article_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub commenter_name: String,
    pub message: String,
    pub article_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommentRequest {
    pub commenter_name: String,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/comments",
    params(CommentListParams),
    responses(
        (status = 200, description = "One page of comments, most recently updated first.", body = CommentListResponse),
        (status = 400, description = "Invalid paging parameters or article id.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<CommentListParams>,
) -> HttpResult<Json<CommentListResponse>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            page: params.page,
            per_page: params.per_page,
            article_id: params.article_id,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment.", body = CommentDto),
        (status = 404, description = "Comment not found.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_queries
        .get_comment_by_id(GetCommentByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CreatedResponse),
        (status = 400, description = "Invalid comment.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CreatedResponse>)> {
    let command = CreateCommentCommand {
        commenter_name: payload.commenter_name,
        message: payload.message,
        article_id: payload.article_id,
    };

    state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()
        .map(created)
}

#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment id")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Updated comment.", body = CommentDto),
        (status = 400, description = "Invalid comment.", body = ErrorResponse),
        (status = 404, description = "Comment not found.", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = UpdateCommentCommand {
        id,
        commenter_name: payload.commenter_name,
        message: payload.message,
    };

    state
        .services
        .comment_commands
        .update_comment(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted.", body = DeletedResponse),
        (status = 404, description = "Comment not found.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()
        .map(deleted)
}
