// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CommentDto, PaginationResult, TagDto, UserDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

macro_rules! list_response {
    ($name:ident, $item:ty) => {
        #[derive(Debug, Serialize, Deserialize, ToSchema)]
        pub struct $name {
            pub total_count: u64,
            pub results: Vec<$item>,
            pub results_per_page: u32,
            pub page_number: u32,
            pub total_pages: u64,
        }

        impl From<PaginationResult<$item>> for $name {
            fn from(page: PaginationResult<$item>) -> Self {
                Self {
                    total_count: page.total_count,
                    results: page.results,
                    results_per_page: page.results_per_page,
                    page_number: page.page_number,
                    total_pages: page.total_pages,
                }
            }
        }
    };
}

list_response!(ArticleListResponse, ArticleDto);
list_response!(CommentListResponse, CommentDto);
list_response!(TagListResponse, TagDto);
list_response!(UserListResponse, UserDto);

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::get_comment,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::update_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::get_tag,
        crate::presentation::http::controllers::tags::create_tag,
        crate::presentation::http::controllers::tags::update_tag,
        crate::presentation::http::controllers::tags::delete_tag,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::create_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::delete_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            CommentListResponse,
            TagListResponse,
            UserListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::CreatedResponse,
            crate::presentation::http::controllers::DeletedResponse,
            crate::presentation::http::controllers::PageParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::presentation::http::controllers::comments::UpdateCommentRequest,
            crate::presentation::http::controllers::tags::TagRequest,
            crate::presentation::http::controllers::users::UserRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::TagDto,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Articles", description = "Articles with their tags, author and comments"),
        (name = "Comments", description = "Reader comments on articles"),
        (name = "Tags", description = "Uniquely named article tags"),
        (name = "Users", description = "Article authors"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blog API",
        description = "CRUD backend for articles, comments, tags and users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push(DEFAULT_SERVER_URL.to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/redoc") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
