// src/domain/repository.rs
use crate::domain::entity::{Entity, EntityId};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::query::{Filter, OrderKey};
use async_trait::async_trait;

pub const DEFAULT_LIST_LIMIT: u32 = 1000;

/// Result of a delete; the store's own failures are reported here instead of
/// being raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    StoreFailure(String),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Stamps `created_at`/`updated_at`, assigns an id when the entity has
    /// none, and persists it.
    async fn create(&self, entity: E) -> DomainResult<EntityId>;

    async fn get_by_id(&self, id: EntityId) -> DomainResult<Option<E>>;

    async fn get_first_where(&self, filter: Filter, order: OrderKey) -> DomainResult<Option<E>>;

    async fn get_all_where(
        &self,
        filter: Filter,
        order: OrderKey,
        limit: u32,
    ) -> DomainResult<Vec<E>>;

    /// All entities, newest `updated_at` first.
    async fn get_all(&self, request: PageRequest) -> DomainResult<Page<E>>;

    async fn get_page_where(&self, request: PageRequest, filter: Filter) -> DomainResult<Page<E>>;

    /// Refreshes `updated_at` and writes every field of a persisted entity.
    async fn update(&self, entity: E) -> DomainResult<E>;

    async fn delete(&self, id: EntityId) -> DeleteOutcome;
}
