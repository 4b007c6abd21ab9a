// src/infrastructure/repositories/memory.rs
//! Process-local store used by tests and database-less runs.

use crate::application::ports::time::Clock;
use crate::domain::{
    entity::{Entity, EntityId},
    errors::{DomainError, DomainResult},
    pagination::{Page, PageRequest},
    query::{Filter, OrderKey},
    repository::{DeleteOutcome, Repository},
};
use async_trait::async_trait;
use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

pub struct InMemoryRepository<E> {
    records: RwLock<HashMap<EntityId, E>>,
    clock: Arc<dyn Clock>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            clock,
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, HashMap<EntityId, E>>> {
        self.records
            .read()
            .map_err(|_| DomainError::persistence(format!("{} store lock poisoned", E::KIND)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<EntityId, E>>> {
        self.records
            .write()
            .map_err(|_| DomainError::persistence(format!("{} store lock poisoned", E::KIND)))
    }

    /// Matches of `filter`, sorted by `order` descending then id descending.
    fn sorted(&self, filter: &Filter, order: OrderKey) -> DomainResult<Vec<E>> {
        filter.validate::<E>()?;
        order.validate::<E>()?;

        let mut matches: Vec<E> = self
            .read()?
            .values()
            .filter(|entity| filter.matches(*entity))
            .cloned()
            .collect();

        let column = order.column();
        matches.sort_by(|a, b| {
            let by_key = b
                .value_of(column)
                .partial_cmp(&a.value_of(column))
                .unwrap_or(Ordering::Equal);
            by_key.then_with(|| b.id().cmp(&a.id()))
        });
        Ok(matches)
    }

    fn page(&self, request: PageRequest, filter: &Filter) -> DomainResult<Page<E>> {
        let matches = self.sorted(filter, OrderKey::UpdatedAt)?;
        let total = matches.len() as u64;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let results = matches
            .into_iter()
            .skip(skip)
            .take(request.per_page() as usize)
            .collect();
        Ok(Page::new(request, total, results))
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn create(&self, mut entity: E) -> DomainResult<EntityId> {
        entity.meta_mut().stamp_created(self.clock.now());
        let id = entity.id();

        let mut records = self.write()?;
        if records.contains_key(&id) {
            return Err(DomainError::Conflict(format!("{} {id} already exists", E::KIND)));
        }
        records.insert(id, entity);
        Ok(id)
    }

    async fn get_by_id(&self, id: EntityId) -> DomainResult<Option<E>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn get_first_where(&self, filter: Filter, order: OrderKey) -> DomainResult<Option<E>> {
        Ok(self.sorted(&filter, order)?.into_iter().next())
    }

    async fn get_all_where(
        &self,
        filter: Filter,
        order: OrderKey,
        limit: u32,
    ) -> DomainResult<Vec<E>> {
        let mut matches = self.sorted(&filter, order)?;
        matches.truncate(limit as usize);
        Ok(matches)
    }

    async fn get_all(&self, request: PageRequest) -> DomainResult<Page<E>> {
        self.page(request, &Filter::All)
    }

    async fn get_page_where(&self, request: PageRequest, filter: Filter) -> DomainResult<Page<E>> {
        self.page(request, &filter)
    }

    async fn update(&self, mut entity: E) -> DomainResult<E> {
        if !entity.meta().is_persisted() {
            return Err(DomainError::validation(format!(
                "cannot update a {} that was never stored",
                E::KIND
            )));
        }

        let mut records = self.write()?;
        let stored = records
            .get(&entity.id())
            .ok_or_else(|| DomainError::not_found(format!("{} not found", E::KIND)))?;

        let meta = entity.meta_mut();
        meta.created_at = stored.meta().created_at;
        meta.updated_at = stored.meta().updated_at;
        meta.touch(self.clock.now());

        records.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> DeleteOutcome {
        match self.write() {
            Ok(mut records) => match records.remove(&id) {
                Some(_) => DeleteOutcome::Deleted,
                None => DeleteOutcome::NotFound,
            },
            Err(err) => DeleteOutcome::StoreFailure(err.to_string()),
        }
    }
}
