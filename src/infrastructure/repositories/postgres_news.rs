// src/infrastructure/repositories/postgres_news.rs
use super::{listing::ListingTable, map_sqlx};
use crate::domain::content::{Description, ImageRef, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::ListQuery;
use crate::domain::news::{NewNewsItem, NewsId, NewsItem, NewsItemUpdate, NewsRepository};
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COLUMNS: &str =
    "id, title, description, visibility, image_url, slug, created_at, updated_at";

const LISTING: ListingTable = ListingTable {
    table: "news_items",
    columns: COLUMNS,
    visible: "visibility = TRUE",
    hidden: "visibility = FALSE",
    has_category: false,
};

#[derive(Clone)]
pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsRow {
    id: Uuid,
    title: String,
    description: String,
    visibility: bool,
    image_url: Option<String>,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NewsRow> for NewsItem {
    type Error = DomainError;

    fn try_from(row: NewsRow) -> Result<Self, Self::Error> {
        Ok(NewsItem {
            id: NewsId::from(row.id),
            title: Title::new(row.title)?,
            description: Description::new(row.description)?,
            visibility: row.visibility,
            image: row.image_url.map(ImageRef::new).transpose()?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugIndex<NewsId> for PostgresNewsRepository {
    async fn is_slug_taken(&self, slug: &Slug, excluding: Option<NewsId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM news_items WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(excluding.map(Uuid::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem> {
        let NewNewsItem {
            id,
            title,
            description,
            visibility,
            image,
            slug,
            created_at,
            updated_at,
        } = item;

        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "INSERT INTO news_items (id, title, description, visibility, image_url, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(visibility)
        .bind(image.as_ref().map(ImageRef::as_str))
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        NewsItem::try_from(row)
    }

    async fn update(&self, update: NewsItemUpdate) -> DomainResult<NewsItem> {
        let NewsItemUpdate {
            id,
            title,
            slug,
            description,
            visibility,
            image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE news_items SET updated_at = ");
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
        if let Some(visibility) = visibility {
            builder.push(", visibility = ");
            builder.push_bind(visibility);
        }
        if let Some(image) = image {
            builder.push(", image_url = ");
            builder.push_bind(image.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<NewsRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("news item not found".into()))?;

        NewsItem::try_from(row)
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news_items WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news item not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsItem>> {
        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "SELECT {COLUMNS} FROM news_items WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NewsItem::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<NewsItem>> {
        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "SELECT {COLUMNS} FROM news_items WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NewsItem::try_from).transpose()
    }

    async fn list(&self, query: &ListQuery) -> DomainResult<(Vec<NewsItem>, u64)> {
        let (rows, total) = LISTING.fetch_page::<NewsRow>(&self.pool, query).await?;
        let items = rows
            .into_iter()
            .map(NewsItem::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((items, total))
    }
}
