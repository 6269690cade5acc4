// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{CategoryId, CategoryName, CategoryRepository, ServiceCategory};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
}

impl TryFrom<CategoryRow> for ServiceCategory {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(ServiceCategory {
            id: CategoryId::from(row.id),
            name: CategoryName::new(row.name)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: ServiceCategory) -> DomainResult<ServiceCategory> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO service_categories (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(Uuid::from(category.id))
        .bind(category.name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ServiceCategory::try_from(row)
    }

    async fn update(&self, category: ServiceCategory) -> DomainResult<ServiceCategory> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE service_categories SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(Uuid::from(category.id))
        .bind(category.name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        ServiceCategory::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM service_categories WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<ServiceCategory>> {
        sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM service_categories WHERE id = $1")
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(ServiceCategory::try_from)
            .transpose()
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<ServiceCategory>> {
        sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM service_categories WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(ServiceCategory::try_from)
            .transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<ServiceCategory>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM service_categories ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ServiceCategory::try_from).collect()
    }
}
