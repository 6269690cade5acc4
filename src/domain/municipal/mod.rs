// src/domain/municipal/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{MunicipalService, MunicipalServiceUpdate, NewMunicipalService};
pub use repository::MunicipalServiceRepository;
pub use value_objects::{ServiceId, ServiceStatus};
