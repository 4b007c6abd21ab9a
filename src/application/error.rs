// src/application/error.rs
use crate::domain::errors::DomainError;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unexpected failure: {0}")]
    Unexpected(ServiceFault),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(ServiceFault::capture(msg))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::Persistence(msg) => Self::unexpected(msg),
        }
    }
}

/// A fault caught at the service boundary: its message plus, when
/// `RUST_BACKTRACE` is set, where it was caught.
#[derive(Debug)]
pub struct ServiceFault {
    pub message: String,
    pub trace: Option<String>,
}

impl ServiceFault {
    pub fn capture(message: impl Into<String>) -> Self {
        let backtrace = Backtrace::capture();
        let trace = match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };
        Self {
            message: message.into(),
            trace,
        }
    }
}

impl fmt::Display for ServiceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_errors_become_unexpected_faults() {
        let err = ApplicationError::from(DomainError::persistence("connection reset"));
        match err {
            ApplicationError::Unexpected(fault) => assert_eq!(fault.message, "connection reset"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn domain_kinds_map_one_to_one() {
        assert!(matches!(
            ApplicationError::from(DomainError::validation("bad")),
            ApplicationError::Validation(_)
        ));
        assert!(matches!(
            ApplicationError::from(DomainError::not_found("gone")),
            ApplicationError::NotFound(_)
        ));
        assert!(matches!(
            ApplicationError::from(DomainError::Conflict("dup".into())),
            ApplicationError::Conflict(_)
        ));
    }
}
