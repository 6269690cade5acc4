// src/domain/category/repository.rs
use crate::domain::category::entity::ServiceCategory;
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the name is already used.
    async fn insert(&self, category: ServiceCategory) -> DomainResult<ServiceCategory>;
    async fn update(&self, category: ServiceCategory) -> DomainResult<ServiceCategory>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<ServiceCategory>>;
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<ServiceCategory>>;
    /// Ordered by name.
    async fn list_all(&self) -> DomainResult<Vec<ServiceCategory>>;
}
