// src/domain/municipal/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::content::{Description, ImageRef, Title};
use crate::domain::listing::Listable;
use crate::domain::municipal::value_objects::{ServiceId, ServiceStatus};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct MunicipalService {
    pub id: ServiceId,
    pub title: Title,
    pub description: Description,
    pub status: ServiceStatus,
    pub image: Option<ImageRef>,
    pub slug: Slug,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MunicipalService {
    pub fn rename(&mut self, title: Title, slug: Slug, now: DateTime<Utc>) {
        self.title = title;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_description(&mut self, description: Description, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = now;
    }

    pub fn set_status(&mut self, status: ServiceStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    pub fn set_image(&mut self, image: Option<ImageRef>, now: DateTime<Utc>) {
        self.image = image;
        self.updated_at = now;
    }

    pub fn assign_category(&mut self, category_id: Option<CategoryId>, now: DateTime<Utc>) {
        self.category_id = category_id;
        self.updated_at = now;
    }
}

impl Listable for MunicipalService {
    fn id(&self) -> Uuid {
        self.id.into()
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn description(&self) -> &str {
        self.description.as_str()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn is_visible(&self) -> bool {
        self.status.is_public()
    }

    fn category_id(&self) -> Option<Uuid> {
        self.category_id.map(Into::into)
    }
}

#[derive(Debug, Clone)]
pub struct NewMunicipalService {
    pub id: ServiceId,
    pub title: Title,
    pub description: Description,
    pub status: ServiceStatus,
    pub image: Option<ImageRef>,
    pub slug: Slug,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewMunicipalService {
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = slug;
        self
    }
}

/// `category_id: Some(None)` detaches the category.
#[derive(Debug, Clone)]
pub struct MunicipalServiceUpdate {
    pub id: ServiceId,
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub description: Option<Description>,
    pub status: Option<ServiceStatus>,
    pub image: Option<ImageRef>,
    pub category_id: Option<Option<CategoryId>>,
    pub updated_at: DateTime<Utc>,
}

impl MunicipalServiceUpdate {
    pub fn new(id: ServiceId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            status: None,
            image: None,
            category_id: None,
            updated_at,
        }
    }

    pub fn diff(before: &MunicipalService, after: &MunicipalService) -> Self {
        let mut update = Self::new(after.id, after.updated_at);
        if before.title != after.title {
            update.title = Some(after.title.clone());
        }
        if before.slug != after.slug {
            update.slug = Some(after.slug.clone());
        }
        if before.description != after.description {
            update.description = Some(after.description.clone());
        }
        if before.status != after.status {
            update.status = Some(after.status);
        }
        if before.image != after.image {
            update.image = after.image.clone();
        }
        if before.category_id != after.category_id {
            update.category_id = Some(after.category_id);
        }
        update
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn apply_to(&self, service: &mut MunicipalService) {
        if let Some(title) = &self.title {
            service.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            service.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            service.description = description.clone();
        }
        if let Some(status) = self.status {
            service.status = status;
        }
        if let Some(image) = &self.image {
            service.image = Some(image.clone());
        }
        if let Some(category_id) = self.category_id {
            service.category_id = category_id;
        }
        service.updated_at = self.updated_at;
    }
}
