// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;
pub mod tags;
pub mod users;

use crate::domain::entity::EntityId;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number (default 1).
    pub page: Option<u32>,
    /// Page size, 1 to 100 (default 3).
    pub per_page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub id: String,
    pub status: String,
}

pub(crate) fn created(id: EntityId) -> (StatusCode, Json<CreatedResponse>) {
    (
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_string() }),
    )
}

pub(crate) fn deleted(id: EntityId) -> Json<DeletedResponse> {
    Json(DeletedResponse {
        id: id.to_string(),
        status: "deleted".into(),
    })
}
