// src/domain/municipal/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::listing::ListQuery;
use crate::domain::municipal::entity::{
    MunicipalService, MunicipalServiceUpdate, NewMunicipalService,
};
use crate::domain::municipal::value_objects::ServiceId;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;

#[async_trait]
pub trait MunicipalServiceRepository: SlugIndex<ServiceId> {
    /// Fails with `DomainError::DuplicateSlug` when the slug index rejects the row.
    async fn insert(&self, service: NewMunicipalService) -> DomainResult<MunicipalService>;
    async fn update(&self, update: MunicipalServiceUpdate) -> DomainResult<MunicipalService>;
    async fn delete(&self, id: ServiceId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ServiceId) -> DomainResult<Option<MunicipalService>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<MunicipalService>>;
    async fn list(&self, query: &ListQuery) -> DomainResult<(Vec<MunicipalService>, u64)>;
}
