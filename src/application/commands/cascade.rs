// src/application/commands/cascade.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    entity::Entity,
    query::{Filter, OrderKey},
    repository::{DEFAULT_LIST_LIMIT, DeleteOutcome, Repository},
};

/// Deletes every record matching `filter`, returning how many went.
/// Used for the dependents (tag edges, comments) of a record about to go.
pub(crate) async fn remove_matching<E: Entity>(
    repo: &dyn Repository<E>,
    filter: Filter,
) -> ApplicationResult<usize> {
    let mut removed = 0;
    loop {
        let batch = repo
            .get_all_where(filter.clone(), OrderKey::CreatedAt, DEFAULT_LIST_LIMIT)
            .await?;
        let exhausted = batch.len() < DEFAULT_LIST_LIMIT as usize;

        for record in batch {
            match repo.delete(record.id()).await {
                DeleteOutcome::Deleted => removed += 1,
                DeleteOutcome::NotFound => {}
                DeleteOutcome::StoreFailure(msg) => return Err(ApplicationError::unexpected(msg)),
            }
        }

        if exhausted {
            return Ok(removed);
        }
    }
}
