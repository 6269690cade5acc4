// src/application/queries/municipal/mod.rs
mod get;
mod list;
mod service;

pub use service::MunicipalQueryService;
