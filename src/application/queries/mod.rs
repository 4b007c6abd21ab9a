pub mod articles;
pub mod comments;
pub mod tags;
pub mod users;
