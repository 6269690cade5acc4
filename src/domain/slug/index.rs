// src/domain/slug/index.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Lookup over the stored slugs of one entity type.
#[async_trait]
pub trait SlugIndex<Id>: Send + Sync
where
    Id: Copy + Send + Sync + 'static,
{
    /// `excluding` names the record being updated so it does not collide with itself.
    async fn is_slug_taken(&self, slug: &Slug, excluding: Option<Id>) -> DomainResult<bool>;
}
