pub mod entity;
pub mod tagging;
pub mod value_objects;

pub use entity::Article;
pub use tagging::ArticleTag;
pub use value_objects::{ArticleContent, ArticleTitle};
