pub mod articles;
pub mod comments;
pub mod tags;
pub mod users;

mod cascade;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::repository::DeleteOutcome;

/// Turns a repository delete outcome into a service result.
pub(crate) fn expect_deleted(outcome: DeleteOutcome, kind: &str) -> ApplicationResult<()> {
    match outcome {
        DeleteOutcome::Deleted => Ok(()),
        DeleteOutcome::NotFound => Err(ApplicationError::not_found(format!("{kind} not found"))),
        DeleteOutcome::StoreFailure(msg) => Err(ApplicationError::unexpected(msg)),
    }
}
