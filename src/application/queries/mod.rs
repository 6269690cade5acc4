// src/application/queries/mod.rs
pub mod categories;
pub mod listing;
pub mod municipal;
pub mod news;

pub use listing::ListingParams;
