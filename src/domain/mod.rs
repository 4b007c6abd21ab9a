pub mod article;
pub mod comment;
pub mod entity;
pub mod errors;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod tag;
pub(crate) mod text;
pub mod user;
