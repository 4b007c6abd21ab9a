// src/domain/entity.rs
//! Base shape shared by every persisted record: an identifier plus
//! creation and modification timestamps.

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Duration, DurationRound, TimeDelta, Utc};
use std::{cmp::Ordering, fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Placeholder id carried by records that have not been persisted yet.
    pub const fn unassigned() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_unassigned(&self) -> bool {
        self.0.is_nil()
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        let uuid = Uuid::parse_str(value.trim())
            .map_err(|_| DomainError::validation(format!("malformed identifier: {value}")))?;
        if uuid.is_nil() {
            return Err(DomainError::validation("identifier cannot be empty"));
        }
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<EntityId> for Uuid {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity and timestamps. Only the repository mutates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityMeta {
    pub fn unsaved() -> Self {
        Self {
            id: EntityId::unassigned(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_unassigned()
    }

    /// Stamps both timestamps for a first write and assigns an id when missing.
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        if self.id.is_unassigned() {
            self.id = EntityId::generate();
        }
        let now = storage_precision(now);
        self.created_at = now;
        self.updated_at = now;
    }

    /// Refreshes `updated_at`, always moving it strictly forward.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let now = storage_precision(now);
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// PostgreSQL keeps microseconds; truncating up front keeps stored and
/// in-memory values comparable.
fn storage_precision(value: DateTime<Utc>) -> DateTime<Utc> {
    value
        .duration_trunc(TimeDelta::microseconds(1))
        .unwrap_or(value)
}

/// A field value as seen by filters, ordering and SQL binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Id(EntityId),
    Text(String),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl PartialOrd for FieldValue {
    /// Values of different kinds are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Id(a), Self::Id(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<EntityId> for FieldValue {
    fn from(value: EntityId) -> Self {
        Self::Id(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

pub const ID_FIELD: &str = "id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// A record the generic repository can store.
///
/// `FIELDS` lists the entity's own columns, excluding the base shape; every
/// name in it must be answered by [`Entity::field`].
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: &'static str;
    const FIELDS: &'static [&'static str];

    fn meta(&self) -> &EntityMeta;
    fn meta_mut(&mut self) -> &mut EntityMeta;
    fn field(&self, name: &str) -> Option<FieldValue>;

    fn id(&self) -> EntityId {
        self.meta().id
    }

    /// Looks up either a base column or one of `FIELDS`.
    fn value_of(&self, name: &str) -> Option<FieldValue> {
        let meta = self.meta();
        match name {
            ID_FIELD => Some(FieldValue::Id(meta.id)),
            CREATED_AT_FIELD => Some(FieldValue::Timestamp(meta.created_at)),
            UPDATED_AT_FIELD => Some(FieldValue::Timestamp(meta.updated_at)),
            other => self.field(other),
        }
    }

    fn has_column(name: &str) -> bool {
        matches!(name, ID_FIELD | CREATED_AT_FIELD | UPDATED_AT_FIELD)
            || Self::FIELDS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_malformed_and_nil_ids() {
        assert!(matches!(
            EntityId::parse("not-a-uuid"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            EntityId::parse("00000000-0000-0000-0000-000000000000"),
            Err(DomainError::Validation(_))
        ));
        let id = EntityId::generate();
        assert_eq!(EntityId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn stamp_created_assigns_id_and_equal_timestamps() {
        let mut meta = EntityMeta::unsaved();
        let now = Utc::now();
        meta.stamp_created(now);
        assert!(meta.is_persisted());
        assert_eq!(meta.created_at, meta.updated_at);
        assert!((now - meta.created_at).num_microseconds().unwrap() < 1);
    }

    #[test]
    fn touch_moves_forward_even_with_a_stalled_clock() {
        let mut meta = EntityMeta::unsaved();
        let now = Utc::now();
        meta.stamp_created(now);
        meta.touch(now);
        assert!(meta.updated_at > meta.created_at);
        let first = meta.updated_at;
        meta.touch(now - Duration::seconds(5));
        assert!(meta.updated_at > first);
    }

    #[test]
    fn mixed_field_kinds_do_not_compare() {
        let a = FieldValue::text("a");
        let b = FieldValue::Bool(true);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(FieldValue::text("a") < FieldValue::text("b"));
    }
}
