// src/infrastructure/repositories/postgres_service.rs
use super::{listing::ListingTable, map_sqlx};
use crate::domain::category::CategoryId;
use crate::domain::content::{Description, ImageRef, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::ListQuery;
use crate::domain::municipal::{
    MunicipalService, MunicipalServiceRepository, MunicipalServiceUpdate, NewMunicipalService,
    ServiceId, ServiceStatus,
};
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COLUMNS: &str =
    "id, title, description, status, image_url, slug, category_id, created_at, updated_at";

const LISTING: ListingTable = ListingTable {
    table: "services",
    columns: COLUMNS,
    visible: "status = 0",
    hidden: "status <> 0",
    has_category: true,
};

#[derive(Clone)]
pub struct PostgresServiceRepository {
    pool: PgPool,
}

impl PostgresServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceRow {
    id: Uuid,
    title: String,
    description: String,
    status: i16,
    image_url: Option<String>,
    slug: String,
    category_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ServiceRow> for MunicipalService {
    type Error = DomainError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(MunicipalService {
            id: ServiceId::from(row.id),
            title: Title::new(row.title)?,
            description: Description::new(row.description)?,
            status: ServiceStatus::from_code(row.status)?,
            image: row.image_url.map(ImageRef::new).transpose()?,
            slug: Slug::new(row.slug)?,
            category_id: row.category_id.map(CategoryId::from),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugIndex<ServiceId> for PostgresServiceRepository {
    async fn is_slug_taken(&self, slug: &Slug, excluding: Option<ServiceId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM services WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(excluding.map(Uuid::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl MunicipalServiceRepository for PostgresServiceRepository {
    async fn insert(&self, service: NewMunicipalService) -> DomainResult<MunicipalService> {
        let NewMunicipalService {
            id,
            title,
            description,
            status,
            image,
            slug,
            category_id,
            created_at,
            updated_at,
        } = service;

        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "INSERT INTO services (id, title, description, status, image_url, slug, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(status.code())
        .bind(image.as_ref().map(ImageRef::as_str))
        .bind(slug.as_str())
        .bind(category_id.map(Uuid::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        MunicipalService::try_from(row)
    }

    async fn update(&self, update: MunicipalServiceUpdate) -> DomainResult<MunicipalService> {
        let MunicipalServiceUpdate {
            id,
            title,
            slug,
            description,
            status,
            image,
            category_id,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE services SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.into_inner());
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.code());
        }
        if let Some(image) = image {
            builder.push(", image_url = ");
            builder.push_bind(image.into_inner());
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(Uuid::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<ServiceRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("service not found".into()))?;

        MunicipalService::try_from(row)
    }

    async fn delete(&self, id: ServiceId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("service not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ServiceId) -> DomainResult<Option<MunicipalService>> {
        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {COLUMNS} FROM services WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(MunicipalService::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<MunicipalService>> {
        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {COLUMNS} FROM services WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(MunicipalService::try_from).transpose()
    }

    async fn list(&self, query: &ListQuery) -> DomainResult<(Vec<MunicipalService>, u64)> {
        let (rows, total) = LISTING.fetch_page::<ServiceRow>(&self.pool, query).await?;
        let services = rows
            .into_iter()
            .map(MunicipalService::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((services, total))
    }
}
