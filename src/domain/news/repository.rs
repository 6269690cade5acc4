// src/domain/news/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::listing::ListQuery;
use crate::domain::news::entity::{NewNewsItem, NewsItem, NewsItemUpdate};
use crate::domain::news::value_objects::NewsId;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;

#[async_trait]
pub trait NewsRepository: SlugIndex<NewsId> {
    /// Fails with `DomainError::DuplicateSlug` when the slug index rejects the row.
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem>;
    async fn update(&self, update: NewsItemUpdate) -> DomainResult<NewsItem>;
    async fn delete(&self, id: NewsId) -> DomainResult<()>;
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsItem>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NewsItem>>;
    async fn list(&self, query: &ListQuery) -> DomainResult<(Vec<NewsItem>, u64)>;
}
