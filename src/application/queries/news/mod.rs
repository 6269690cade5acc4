// src/application/queries/news/mod.rs
mod get;
mod list;
mod service;

pub use service::NewsQueryService;
