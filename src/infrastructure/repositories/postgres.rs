// src/infrastructure/repositories/postgres.rs
use super::{describe_delete_failure, map_sqlx};
use crate::application::ports::time::Clock;
use crate::domain::{
    entity::{CREATED_AT_FIELD, Entity, EntityId, FieldValue, ID_FIELD, UPDATED_AT_FIELD},
    errors::{DomainError, DomainResult},
    pagination::{Page, PageRequest},
    query::{Filter, OrderKey},
    repository::{DeleteOutcome, Repository},
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, postgres::PgRow};
use std::{marker::PhantomData, sync::Arc};

/// An entity stored in its own PostgreSQL table whose columns are the base
/// shape followed by [`Entity::FIELDS`].
pub trait PgEntity: Entity {
    const TABLE: &'static str;
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    fn from_row(row: Self::Row) -> DomainResult<Self>;
}

pub struct PostgresRepository<E> {
    pool: PgPool,
    clock: Arc<dyn Clock>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PostgresRepository<E> {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            pool,
            clock,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for PostgresRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
            _entity: PhantomData,
        }
    }
}

type Builder = QueryBuilder<'static, Postgres>;

fn columns<E: PgEntity>() -> Vec<&'static str> {
    [ID_FIELD, CREATED_AT_FIELD, UPDATED_AT_FIELD]
        .into_iter()
        .chain(E::FIELDS.iter().copied())
        .collect()
}

fn column_list<E: PgEntity>() -> String {
    columns::<E>().join(", ")
}

fn push_value(builder: &mut Builder, value: FieldValue) {
    match value {
        FieldValue::Id(id) => builder.push_bind(id.as_uuid()),
        FieldValue::Text(text) => builder.push_bind(text),
        FieldValue::Bool(flag) => builder.push_bind(flag),
        FieldValue::Timestamp(at) => builder.push_bind(at),
    };
}

fn flatten<'f>(filter: &'f Filter, out: &mut Vec<(&'static str, &'static str, &'f FieldValue)>) {
    match filter {
        Filter::All => {}
        Filter::Eq(column, value) => out.push((*column, " = ", value)),
        Filter::Ne(column, value) => out.push((*column, " <> ", value)),
        Filter::And(parts) => parts.iter().for_each(|part| flatten(part, out)),
    }
}

fn push_filter(builder: &mut Builder, filter: &Filter) {
    let mut conditions = Vec::new();
    flatten(filter, &mut conditions);
    for (index, (column, op, value)) in conditions.into_iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(column);
        builder.push(op);
        push_value(builder, value.clone());
    }
}

fn value_for<E: Entity>(entity: &E, column: &str) -> DomainResult<FieldValue> {
    entity
        .value_of(column)
        .ok_or_else(|| DomainError::persistence(format!("{} has no value for {column}", E::KIND)))
}

/// `SELECT ... WHERE <filter> ORDER BY <key> DESC, id DESC LIMIT .. OFFSET ..`
pub(crate) fn select_query<E: PgEntity>(
    filter: &Filter,
    order: OrderKey,
    limit: u32,
    offset: u64,
) -> Builder {
    let mut builder = Builder::new(format!("SELECT {} FROM {}", column_list::<E>(), E::TABLE));
    push_filter(&mut builder, filter);
    builder.push(format!(" ORDER BY {} DESC, {ID_FIELD} DESC", order.column()));
    builder.push(" LIMIT ");
    builder.push_bind(i64::from(limit));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));
    builder
}

pub(crate) fn count_query<E: PgEntity>(filter: &Filter) -> Builder {
    let mut builder = Builder::new(format!("SELECT COUNT(*) FROM {}", E::TABLE));
    push_filter(&mut builder, filter);
    builder
}

pub(crate) fn insert_query<E: PgEntity>(entity: &E) -> DomainResult<Builder> {
    let columns = columns::<E>();
    let mut builder = Builder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        E::TABLE,
        columns.join(", ")
    ));
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        push_value(&mut builder, value_for(entity, column)?);
    }
    builder.push(")");
    Ok(builder)
}

/// Writes `updated_at` and every entity column; `id` and `created_at` stay.
pub(crate) fn update_query<E: PgEntity>(entity: &E) -> DomainResult<Builder> {
    let mut builder = Builder::new(format!("UPDATE {} SET {UPDATED_AT_FIELD} = ", E::TABLE));
    push_value(&mut builder, FieldValue::Timestamp(entity.meta().updated_at));
    for column in E::FIELDS {
        builder.push(format!(", {column} = "));
        push_value(&mut builder, value_for(entity, column)?);
    }
    builder.push(format!(" WHERE {ID_FIELD} = "));
    builder.push_bind(entity.id().as_uuid());
    builder.push(format!(" RETURNING {}", column_list::<E>()));
    Ok(builder)
}

impl<E: PgEntity> PostgresRepository<E> {
    async fn fetch(&self, mut builder: Builder) -> DomainResult<Vec<E>> {
        let rows = builder
            .build_query_as::<E::Row>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(E::from_row).collect()
    }

    async fn count(&self, filter: &Filter) -> DomainResult<u64> {
        let mut builder = count_query::<E>(filter);
        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn page(
        &self,
        request: PageRequest,
        filter: Filter,
        order: OrderKey,
    ) -> DomainResult<Page<E>> {
        filter.validate::<E>()?;
        let total = self.count(&filter).await?;
        let results = self
            .fetch(select_query::<E>(
                &filter,
                order,
                request.per_page(),
                request.offset(),
            ))
            .await?;
        Ok(Page::new(request, total, results))
    }
}

#[async_trait]
impl<E: PgEntity> Repository<E> for PostgresRepository<E> {
    async fn create(&self, mut entity: E) -> DomainResult<EntityId> {
        entity.meta_mut().stamp_created(self.clock.now());
        let mut builder = insert_query(&entity)?;
        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(entity.id())
    }

    async fn get_by_id(&self, id: EntityId) -> DomainResult<Option<E>> {
        let mut builder = Builder::new(format!(
            "SELECT {} FROM {} WHERE {ID_FIELD} = ",
            column_list::<E>(),
            E::TABLE
        ));
        builder.push_bind(id.as_uuid());
        let row = builder
            .build_query_as::<E::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(E::from_row).transpose()
    }

    async fn get_first_where(&self, filter: Filter, order: OrderKey) -> DomainResult<Option<E>> {
        Ok(self.get_all_where(filter, order, 1).await?.into_iter().next())
    }

    async fn get_all_where(
        &self,
        filter: Filter,
        order: OrderKey,
        limit: u32,
    ) -> DomainResult<Vec<E>> {
        filter.validate::<E>()?;
        order.validate::<E>()?;
        self.fetch(select_query::<E>(&filter, order, limit, 0)).await
    }

    async fn get_all(&self, request: PageRequest) -> DomainResult<Page<E>> {
        self.page(request, Filter::All, OrderKey::UpdatedAt).await
    }

    async fn get_page_where(&self, request: PageRequest, filter: Filter) -> DomainResult<Page<E>> {
        self.page(request, filter, OrderKey::UpdatedAt).await
    }

    async fn update(&self, mut entity: E) -> DomainResult<E> {
        if !entity.meta().is_persisted() {
            return Err(DomainError::validation(format!(
                "cannot update a {} that was never stored",
                E::KIND
            )));
        }
        entity.meta_mut().touch(self.clock.now());

        let mut builder = update_query(&entity)?;
        let row = builder
            .build_query_as::<E::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(format!("{} not found", E::KIND)))?;
        E::from_row(row)
    }

    async fn delete(&self, id: EntityId) -> DeleteOutcome {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE {ID_FIELD} = $1", E::TABLE))
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await;
        match result {
            Ok(done) if done.rows_affected() == 0 => DeleteOutcome::NotFound,
            Ok(_) => DeleteOutcome::Deleted,
            Err(err) => {
                let message = describe_delete_failure(E::KIND, err);
                tracing::warn!(kind = E::KIND, %id, error = %message, "delete failed");
                DeleteOutcome::StoreFailure(message)
            }
        }
    }
}
