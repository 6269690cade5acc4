// src/domain/slug/mod.rs
pub mod index;
pub mod service;
pub mod value_object;

pub use index::SlugIndex;
pub use service::{MAX_SLUG_PROBES, SlugService};
pub use value_object::Slug;
