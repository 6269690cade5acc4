// src/domain/news/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewNewsItem, NewsItem, NewsItemUpdate};
pub use repository::NewsRepository;
pub use value_objects::NewsId;
