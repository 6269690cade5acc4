// tests/support/mocks.rs
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use municipal_portal::application::ApplicationResult;
use municipal_portal::application::dto::AuthenticatedUser;
use municipal_portal::application::error::ApplicationError;
use municipal_portal::application::ports::security::TokenVerifier;
use municipal_portal::application::ports::storage::BlobStore;
use municipal_portal::application::ports::time::Clock;
use municipal_portal::domain::access::Role;
use municipal_portal::domain::category::{
    CategoryId, CategoryName, CategoryRepository, ServiceCategory,
};
use municipal_portal::domain::errors::{DomainError, DomainResult};
use municipal_portal::domain::listing::ListQuery;
use municipal_portal::domain::municipal::{
    MunicipalService, MunicipalServiceRepository, MunicipalServiceUpdate, NewMunicipalService,
    ServiceId,
};
use municipal_portal::domain::news::{NewNewsItem, NewsId, NewsItem, NewsItemUpdate, NewsRepository};
use municipal_portal::domain::slug::{Slug, SlugIndex};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-05-01T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Advances one second per call so creation order is observable.
#[derive(Default)]
pub struct DummyClock {
    ticks: AtomicI64,
}

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

pub fn user_with_role(subject: &str, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        subject: subject.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub struct DummyTokenVerifier;

#[async_trait]
impl TokenVerifier for DummyTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(user_with_role("admin", Role::Admin)),
            EDITOR_TOKEN => Ok(user_with_role("editor", Role::Editor)),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub reference: String,
    pub folder: String,
    pub file_name: Option<String>,
    pub len: usize,
}

#[derive(Default)]
pub struct RecordingBlobStore {
    pub stored: Mutex<Vec<StoredBlob>>,
    written: AtomicU32,
}

impl RecordingBlobStore {
    pub fn stored(&self) -> Vec<StoredBlob> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for RecordingBlobStore {
    async fn store(
        &self,
        folder: &str,
        original_file_name: Option<&str>,
        bytes: Bytes,
    ) -> ApplicationResult<String> {
        let n = self.written.fetch_add(1, Ordering::SeqCst) + 1;
        let reference = format!("/images/{folder}/blob-{n}.png");
        self.stored.lock().unwrap().push(StoredBlob {
            reference: reference.clone(),
            folder: folder.into(),
            file_name: original_file_name.map(str::to_owned),
            len: bytes.len(),
        });
        Ok(reference)
    }

    async fn remove(&self, reference: &str) -> ApplicationResult<()> {
        self.stored
            .lock()
            .unwrap()
            .retain(|blob| blob.reference != reference);
        Ok(())
    }
}

/// Rejects the next `n` writes with `DuplicateSlug`, as a concurrent writer would.
#[derive(Default)]
pub struct SlugRace {
    remaining: AtomicU32,
}

impl SlugRace {
    pub fn arm(&self, n: u32) {
        self.remaining.store(n, Ordering::SeqCst);
    }

    fn lose(&self, slug: &Slug) -> DomainResult<()> {
        let lost = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if lost {
            Err(DomainError::DuplicateSlug(format!("slug '{slug}' already exists")))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct InMemoryNewsRepository {
    items: Mutex<Vec<NewsItem>>,
    pub race: SlugRace,
    pub inserts: AtomicU32,
    pub updates: AtomicU32,
}

impl InMemoryNewsRepository {
    pub fn seed(&self, item: NewsItem) {
        self.items.lock().unwrap().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

#[async_trait]
impl SlugIndex<NewsId> for InMemoryNewsRepository {
    async fn is_slug_taken(&self, slug: &Slug, excluding: Option<NewsId>) -> DomainResult<bool> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .any(|item| item.slug == *slug && Some(item.id) != excluding))
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.race.lose(&item.slug)?;
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|existing| existing.slug == item.slug) {
            return Err(DomainError::DuplicateSlug(format!(
                "slug '{}' already exists",
                item.slug
            )));
        }
        let stored = NewsItem {
            id: item.id,
            title: item.title,
            description: item.description,
            visibility: item.visibility,
            image: item.image,
            slug: item.slug,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        items.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: NewsItemUpdate) -> DomainResult<NewsItem> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if let Some(slug) = &update.slug {
            self.race.lose(slug)?;
        }
        let mut items = self.items.lock().unwrap();
        if let Some(slug) = &update.slug {
            if items.iter().any(|item| item.slug == *slug && item.id != update.id) {
                return Err(DomainError::DuplicateSlug(format!("slug '{slug}' already exists")));
            }
        }
        let item = items
            .iter_mut()
            .find(|item| item.id == update.id)
            .ok_or_else(|| DomainError::NotFound("news item not found".into()))?;
        update.apply_to(item);
        Ok(item.clone())
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound("news item not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsItem>> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NewsItem>> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|item| item.slug == *slug).cloned())
    }

    async fn list(&self, query: &ListQuery) -> DomainResult<(Vec<NewsItem>, u64)> {
        let items = self.items.lock().unwrap().clone();
        Ok(query.apply(items))
    }
}

#[derive(Default)]
pub struct InMemoryServiceRepository {
    services: Mutex<Vec<MunicipalService>>,
    pub race: SlugRace,
    pub inserts: AtomicU32,
    pub updates: AtomicU32,
}

impl InMemoryServiceRepository {
    pub fn seed(&self, service: MunicipalService) {
        self.services.lock().unwrap().push(service);
    }

    pub fn len(&self) -> usize {
        self.services.lock().unwrap().len()
    }
}

#[async_trait]
impl SlugIndex<ServiceId> for InMemoryServiceRepository {
    async fn is_slug_taken(&self, slug: &Slug, excluding: Option<ServiceId>) -> DomainResult<bool> {
        let services = self.services.lock().unwrap();
        Ok(services
            .iter()
            .any(|service| service.slug == *slug && Some(service.id) != excluding))
    }
}

#[async_trait]
impl MunicipalServiceRepository for InMemoryServiceRepository {
    async fn insert(&self, service: NewMunicipalService) -> DomainResult<MunicipalService> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.race.lose(&service.slug)?;
        let mut services = self.services.lock().unwrap();
        if services.iter().any(|existing| existing.slug == service.slug) {
            return Err(DomainError::DuplicateSlug(format!(
                "slug '{}' already exists",
                service.slug
            )));
        }
        let stored = MunicipalService {
            id: service.id,
            title: service.title,
            description: service.description,
            status: service.status,
            image: service.image,
            slug: service.slug,
            category_id: service.category_id,
            created_at: service.created_at,
            updated_at: service.updated_at,
        };
        services.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: MunicipalServiceUpdate) -> DomainResult<MunicipalService> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if let Some(slug) = &update.slug {
            self.race.lose(slug)?;
        }
        let mut services = self.services.lock().unwrap();
        if let Some(slug) = &update.slug {
            if services
                .iter()
                .any(|service| service.slug == *slug && service.id != update.id)
            {
                return Err(DomainError::DuplicateSlug(format!("slug '{slug}' already exists")));
            }
        }
        let service = services
            .iter_mut()
            .find(|service| service.id == update.id)
            .ok_or_else(|| DomainError::NotFound("service not found".into()))?;
        update.apply_to(service);
        Ok(service.clone())
    }

    async fn delete(&self, id: ServiceId) -> DomainResult<()> {
        let mut services = self.services.lock().unwrap();
        let before = services.len();
        services.retain(|service| service.id != id);
        if services.len() == before {
            return Err(DomainError::NotFound("service not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ServiceId) -> DomainResult<Option<MunicipalService>> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().find(|service| service.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<MunicipalService>> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().find(|service| service.slug == *slug).cloned())
    }

    async fn list(&self, query: &ListQuery) -> DomainResult<(Vec<MunicipalService>, u64)> {
        let services = self.services.lock().unwrap().clone();
        Ok(query.apply(services))
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<ServiceCategory>>,
}

impl InMemoryCategoryRepository {
    fn ensure_unique(
        categories: &[ServiceCategory],
        candidate: &ServiceCategory,
    ) -> DomainResult<()> {
        if categories
            .iter()
            .any(|c| c.name == candidate.name && c.id != candidate.id)
        {
            return Err(DomainError::Conflict(format!(
                "category '{}' already exists",
                candidate.name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: ServiceCategory) -> DomainResult<ServiceCategory> {
        let mut categories = self.categories.lock().unwrap();
        Self::ensure_unique(&categories, &category)?;
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: ServiceCategory) -> DomainResult<ServiceCategory> {
        let mut categories = self.categories.lock().unwrap();
        Self::ensure_unique(&categories, &category)?;
        let stored = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        *stored = category.clone();
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<ServiceCategory>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<ServiceCategory>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.name == *name).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<ServiceCategory>> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()).then(a.id.cmp(&b.id)));
        Ok(categories)
    }
}

/// Set of slugs, for uniqueness assertions.
pub fn distinct<'a>(slugs: impl IntoIterator<Item = &'a str>) -> HashSet<&'a str> {
    slugs.into_iter().collect()
}
