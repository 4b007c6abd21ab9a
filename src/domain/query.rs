// src/domain/query.rs
//! Predicate and sort descriptors understood by every repository backend.

use crate::domain::entity::{CREATED_AT_FIELD, Entity, FieldValue, UPDATED_AT_FIELD};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Eq(&'static str, FieldValue),
    Ne(&'static str, FieldValue),
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<FieldValue>) -> Self {
        Self::Eq(column, value.into())
    }

    pub fn ne(column: &'static str, value: impl Into<FieldValue>) -> Self {
        Self::Ne(column, value.into())
    }

    #[must_use]
    pub fn and(self, other: Filter) -> Self {
        match self {
            Self::All => other,
            Self::And(mut parts) => {
                parts.push(other);
                Self::And(parts)
            }
            first => Self::And(vec![first, other]),
        }
    }

    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        match self {
            Self::All => true,
            Self::Eq(column, value) => entity.value_of(column).as_ref() == Some(value),
            Self::Ne(column, value) => entity
                .value_of(column)
                .is_some_and(|actual| &actual != value),
            Self::And(parts) => parts.iter().all(|part| part.matches(entity)),
        }
    }

    /// Rejects columns the entity does not declare.
    pub fn validate<E: Entity>(&self) -> DomainResult<()> {
        match self {
            Self::All => Ok(()),
            Self::Eq(column, _) | Self::Ne(column, _) => ensure_column::<E>(column),
            Self::And(parts) => parts.iter().try_for_each(Filter::validate::<E>),
        }
    }
}

/// Sort key; results are always returned in descending order of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    CreatedAt,
    UpdatedAt,
    Field(&'static str),
}

impl OrderKey {
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => CREATED_AT_FIELD,
            Self::UpdatedAt => UPDATED_AT_FIELD,
            Self::Field(name) => name,
        }
    }

    pub fn validate<E: Entity>(&self) -> DomainResult<()> {
        ensure_column::<E>(self.column())
    }
}

fn ensure_column<E: Entity>(column: &str) -> DomainResult<()> {
    if E::has_column(column) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "unknown {} column: {column}",
            E::KIND
        )))
    }
}
