pub mod articles;
pub mod comments;
pub mod pagination;
pub mod serde_time;
pub mod tags;
pub mod users;

pub use articles::ArticleDto;
pub use comments::CommentDto;
pub use pagination::PaginationResult;
pub use tags::TagDto;
pub use users::UserDto;
