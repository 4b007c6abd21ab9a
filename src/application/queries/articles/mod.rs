// src/application/queries/articles/mod.rs
mod assembler;
mod get_by_id;
mod list;
mod service;

pub use assembler::ArticleAssembler;
pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
