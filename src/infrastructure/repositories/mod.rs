// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres;
mod rows;

pub use error::{describe_delete_failure, map_sqlx};
pub use memory::InMemoryRepository;
pub use postgres::{PgEntity, PostgresRepository};

use crate::application::{ports::time::Clock, services::Repositories};
use crate::domain::{
    article::{Article, ArticleTag},
    comment::Comment,
    tag::Tag,
    user::User,
};
use sqlx::PgPool;
use std::sync::Arc;

pub fn postgres_repositories(pool: &PgPool, clock: &Arc<dyn Clock>) -> Repositories {
    Repositories {
        articles: Arc::new(PostgresRepository::<Article>::new(pool.clone(), Arc::clone(clock))),
        article_tags: Arc::new(PostgresRepository::<ArticleTag>::new(pool.clone(), Arc::clone(clock))),
        comments: Arc::new(PostgresRepository::<Comment>::new(pool.clone(), Arc::clone(clock))),
        tags: Arc::new(PostgresRepository::<Tag>::new(pool.clone(), Arc::clone(clock))),
        users: Arc::new(PostgresRepository::<User>::new(pool.clone(), Arc::clone(clock))),
    }
}

pub fn in_memory_repositories(clock: &Arc<dyn Clock>) -> Repositories {
    Repositories {
        articles: Arc::new(InMemoryRepository::<Article>::new(Arc::clone(clock))),
        article_tags: Arc::new(InMemoryRepository::<ArticleTag>::new(Arc::clone(clock))),
        comments: Arc::new(InMemoryRepository::<Comment>::new(Arc::clone(clock))),
        tags: Arc::new(InMemoryRepository::<Tag>::new(Arc::clone(clock))),
        users: Arc::new(InMemoryRepository::<User>::new(Arc::clone(clock))),
    }
}
