// src/domain/user/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::User;
pub use value_objects::{Email, PersonName, PictureUrl, Username};
