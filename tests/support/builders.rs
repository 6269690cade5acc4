// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use municipal_portal::domain::category::CategoryId;
use municipal_portal::domain::content::{Description, Title};
use municipal_portal::domain::municipal::{MunicipalService, ServiceId, ServiceStatus};
use municipal_portal::domain::news::{NewsId, NewsItem};
use municipal_portal::domain::slug::Slug;

use super::mocks::fixed_now;

pub struct NewsItemBuilder {
    title: String,
    description: String,
    slug: Option<String>,
    visibility: bool,
    age_days: i64,
}

impl NewsItemBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            slug: None,
            visibility: true,
            age_days: 0,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visibility = false;
        self
    }

    /// Older items sort later in the default newest-first order.
    pub fn days_old(mut self, days: i64) -> Self {
        self.age_days = days;
        self
    }

    pub fn build(self) -> NewsItem {
        let created_at: DateTime<Utc> = fixed_now() - Duration::days(self.age_days);
        let slug = self
            .slug
            .unwrap_or_else(|| slug::slugify(&self.title));
        NewsItem {
            id: NewsId::generate(),
            title: Title::new(self.title).unwrap(),
            description: Description::new(self.description).unwrap(),
            visibility: self.visibility,
            image: None,
            slug: Slug::new(slug).unwrap(),
            created_at,
            updated_at: created_at,
        }
    }
}

pub struct ServiceBuilder {
    title: String,
    description: String,
    status: ServiceStatus,
    category_id: Option<CategoryId>,
    age_days: i64,
}

impl ServiceBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: ServiceStatus::Active,
            category_id: None,
            age_days: 0,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: ServiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn days_old(mut self, days: i64) -> Self {
        self.age_days = days;
        self
    }

    pub fn build(self) -> MunicipalService {
        let created_at = fixed_now() - Duration::days(self.age_days);
        MunicipalService {
            id: ServiceId::generate(),
            slug: Slug::new(slug::slugify(&self.title)).unwrap(),
            title: Title::new(self.title).unwrap(),
            description: Description::new(self.description).unwrap(),
            status: self.status,
            image: None,
            category_id: self.category_id,
            created_at,
            updated_at: created_at,
        }
    }
}
