use crate::domain::news::NewsItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsItemDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub visibility: bool,
    pub image_url: Option<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsItem> for NewsItemDto {
    fn from(item: NewsItem) -> Self {
        Self {
            id: item.id.into(),
            title: item.title.into_inner(),
            description: item.description.into_inner(),
            visibility: item.visibility,
            image_url: item.image.map(|image| image.into_inner()),
            slug: item.slug.into_inner(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
