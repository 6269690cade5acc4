use crate::domain::municipal::{MunicipalService, ServiceStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MunicipalServiceDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: ServiceStatus,
    pub image_url: Option<String>,
    pub slug: String,
    pub category_id: Option<Uuid>,
    /// Absent when the service has no category or it was deleted.
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MunicipalServiceDto {
    pub fn from_service(service: MunicipalService, category_name: Option<String>) -> Self {
        Self {
            id: service.id.into(),
            title: service.title.into_inner(),
            description: service.description.into_inner(),
            status: service.status,
            image_url: service.image.map(|image| image.into_inner()),
            slug: service.slug.into_inner(),
            category_id: service.category_id.map(Into::into),
            category_name,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}
