// src/application/commands/mod.rs
pub mod categories;
pub mod municipal;
pub mod news;

mod upload;

pub use upload::ImageUpload;

use crate::domain::errors::DomainError;

/// Extra writes attempted after the slug index rejects a freshly generated slug.
pub const SLUG_WRITE_RETRIES: u32 = 1;

pub(crate) fn should_retry_slug(err: &DomainError, attempts_so_far: u32) -> bool {
    matches!(err, DomainError::DuplicateSlug(_)) && attempts_so_far < SLUG_WRITE_RETRIES
}
