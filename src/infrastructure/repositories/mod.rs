// src/infrastructure/repositories/mod.rs
mod error;
mod listing;
mod postgres_category;
mod postgres_news;
mod postgres_service;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_news::PostgresNewsRepository;
pub use postgres_service::PostgresServiceRepository;
