// src/infrastructure/repositories/listing.rs
//! Translation of a [`ListQuery`] into PostgreSQL.
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, postgres::PgRow};

use super::map_sqlx;
use crate::domain::{
    errors::DomainResult,
    listing::{ListFilter, ListQuery, SortField, SortOrder, VisibilityFilter},
};

/// Per-table pieces of SQL the shared listing needs.
pub(super) struct ListingTable {
    pub table: &'static str,
    pub columns: &'static str,
    pub visible: &'static str,
    pub hidden: &'static str,
    pub has_category: bool,
}

impl ListingTable {
    pub(super) async fn fetch_page<R>(
        &self,
        pool: &PgPool,
        query: &ListQuery,
    ) -> DomainResult<(Vec<R>, u64)>
    where
        R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", self.table));
        self.push_filter(&mut count, &query.filter);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM {}", self.columns, self.table));
        self.push_filter(&mut select, &query.filter);
        push_order(&mut select, &query.sort);
        select.push(" LIMIT ");
        select.push_bind(i64::try_from(query.page.limit()).unwrap_or(i64::MAX));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(query.page.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<R>()
            .fetch_all(pool)
            .await
            .map_err(map_sqlx)?;

        Ok((rows, u64::try_from(total).unwrap_or_default()))
    }

    fn push_filter(&self, builder: &mut QueryBuilder<'_, Postgres>, filter: &ListFilter) {
        builder.push(" WHERE TRUE");

        match filter.visibility {
            VisibilityFilter::All => {}
            VisibilityFilter::VisibleOnly => {
                builder.push(" AND ");
                builder.push(self.visible);
            }
            VisibilityFilter::HiddenOnly => {
                builder.push(" AND ");
                builder.push(self.hidden);
            }
        }

        if let Some(term) = &filter.search {
            // Backslash is PostgreSQL's default LIKE escape, matching `like_pattern`.
            let pattern = term.like_pattern();
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR description ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        if let (true, Some(category_id)) = (self.has_category, filter.category_id) {
            builder.push(" AND category_id = ");
            builder.push_bind(category_id);
        }
    }
}

fn push_order(builder: &mut QueryBuilder<'_, Postgres>, sort: &SortOrder) {
    let column = match sort.field {
        SortField::CreatedAt => "created_at",
        SortField::UpdatedAt => "updated_at",
        SortField::Title => "LOWER(title)",
    };
    let direction = sort.direction.as_sql();
    builder.push(format!(" ORDER BY {column} {direction}, id {direction}"));
}
