// src/application/queries/news/list.rs
use super::NewsQueryService;
use crate::{
    application::{
        access::require_capability,
        dto::{AuthenticatedUser, NewsItemDto, PaginatedResult},
        error::ApplicationResult,
        queries::ListingParams,
    },
    domain::listing::{ListQuery, VisibilityFilter},
};

impl NewsQueryService {
    /// Public feed. Any visibility the client asks for is ignored.
    pub async fn list_visible_news(
        &self,
        params: ListingParams,
    ) -> ApplicationResult<PaginatedResult<NewsItemDto>> {
        let query = without_category(params).into_query(VisibilityFilter::VisibleOnly)?;
        self.run(query).await
    }

    pub async fn list_all_news(
        &self,
        actor: Option<&AuthenticatedUser>,
        params: ListingParams,
    ) -> ApplicationResult<PaginatedResult<NewsItemDto>> {
        require_capability(actor, "news", "view:hidden")?;
        let visibility = params.requested_visibility();
        let query = without_category(params).into_query(visibility)?;
        self.run(query).await
    }

    async fn run(&self, query: ListQuery) -> ApplicationResult<PaginatedResult<NewsItemDto>> {
        let (items, total) = self.repo.list(&query).await?;
        let page = PaginatedResult::new(items, total, query.page).map(NewsItemDto::from);
        tracing::debug!(total, page = page.page, "listed news");
        Ok(page)
    }
}

/// News has no category, so a category filter would empty every page.
fn without_category(params: ListingParams) -> ListingParams {
    ListingParams {
        category_id: None,
        ..params
    }
}
