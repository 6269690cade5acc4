// src/domain/news/entity.rs
use crate::domain::content::{Description, ImageRef, Title};
use crate::domain::listing::Listable;
use crate::domain::news::value_objects::NewsId;
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: Title,
    pub description: Description,
    pub visibility: bool,
    pub image: Option<ImageRef>,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsItem {
    pub fn rename(&mut self, title: Title, slug: Slug, now: DateTime<Utc>) {
        self.title = title;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_description(&mut self, description: Description, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = now;
    }

    pub fn set_visibility(&mut self, visibility: bool, now: DateTime<Utc>) {
        self.visibility = visibility;
        self.updated_at = now;
    }

    pub fn set_image(&mut self, image: Option<ImageRef>, now: DateTime<Utc>) {
        self.image = image;
        self.updated_at = now;
    }
}

impl Listable for NewsItem {
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
        self.visibility
    }
}

#[derive(Debug, Clone)]
pub struct NewNewsItem {
    pub id: NewsId,
    pub title: Title,
    pub description: Description,
    pub visibility: bool,
    pub image: Option<ImageRef>,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewNewsItem {
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = slug;
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewsItemUpdate {
    pub id: NewsId,
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub description: Option<Description>,
    pub visibility: Option<bool>,
    pub image: Option<ImageRef>,
    pub updated_at: DateTime<Utc>,
}

impl NewsItemUpdate {
    pub fn new(id: NewsId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            visibility: None,
            image: None,
            updated_at,
        }
    }

    /// Copy every field that differs between `before` and `after`.
    pub fn diff(before: &NewsItem, after: &NewsItem) -> Self {
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
        if before.visibility != after.visibility {
            update.visibility = Some(after.visibility);
        }
        if before.image != after.image {
            update.image = after.image.clone();
        }
        update
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    /// Apply the changed fields onto a stored record.
    pub fn apply_to(&self, item: &mut NewsItem) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            item.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(visibility) = self.visibility {
            item.visibility = visibility;
        }
        if let Some(image) = &self.image {
            item.image = Some(image.clone());
        }
        item.updated_at = self.updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> NewsItem {
        let now = Utc::now();
        NewsItem {
            id: NewsId::generate(),
            title: Title::new("Water Supply").unwrap(),
            description: Description::new("schedule").unwrap(),
            visibility: true,
            image: None,
            slug: Slug::new("water-supply").unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn rename_refreshes_timestamp() {
        let mut item = sample();
        let later = item.updated_at + Duration::seconds(5);
        item.rename(
            Title::new("Water Cuts").unwrap(),
            Slug::new("water-cuts").unwrap(),
            later,
        );
        assert_eq!(item.slug.as_str(), "water-cuts");
        assert_eq!(item.updated_at, later);
        assert!(item.created_at < later);
    }

    #[test]
    fn diff_only_carries_changes() {
        let before = sample();
        let mut after = before.clone();
        let later = before.updated_at + Duration::seconds(1);
        after.set_visibility(false, later);

        let update = NewsItemUpdate::diff(&before, &after);
        assert_eq!(update.visibility, Some(false));
        assert!(update.title.is_none());
        assert!(update.slug.is_none());
        assert_eq!(update.updated_at, later);

        let mut stored = before.clone();
        update.apply_to(&mut stored);
        assert!(!stored.visibility);
        assert_eq!(stored.updated_at, later);
    }
}
