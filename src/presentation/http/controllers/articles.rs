// src/presentation/http/controllers/articles.rs
use super::{CreatedResponse, DeletedResponse, PageParams, created, deleted};
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
    pub author_id: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

/// Replaces the article's fields and its whole tag set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
    pub author_id: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(PageParams),
    responses(
        (status = 200, description = "One page of articles, most recently updated first.", body = ArticleListResponse),
        (status = 400, description = "Invalid paging parameters.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with its tags, author and comments.", body = ArticleDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = CreatedResponse),
        (status = 400, description = "Invalid article.", body = ErrorResponse),
        (status = 404, description = "Author not found.", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<CreatedResponse>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        is_published: payload.is_published,
        author_id: payload.author_id,
        tag_ids: payload.tag_ids,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(created)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 400, description = "Invalid article.", body = ErrorResponse),
        (status = 404, description = "Article or author not found.", body = ErrorResponse),
        (status = 422, description = "Body is missing fields or has the wrong types.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        is_published: payload.is_published,
        author_id: payload.author_id,
        tag_ids: payload.tag_ids,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = DeletedResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<String>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()
        .map(deleted)
}
