use crate::domain::category::ServiceCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
}

impl From<ServiceCategory> for CategoryDto {
    fn from(category: ServiceCategory) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
        }
    }
}
