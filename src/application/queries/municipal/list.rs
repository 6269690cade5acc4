// src/application/queries/municipal/list.rs
use super::MunicipalQueryService;
use crate::{
    application::{
        access::require_capability,
        dto::{AuthenticatedUser, MunicipalServiceDto, PaginatedResult},
        error::ApplicationResult,
        queries::ListingParams,
    },
    domain::listing::{ListQuery, VisibilityFilter},
};

impl MunicipalQueryService {
    /// Active services only, whatever visibility the client asked for.
    pub async fn list_visible_services(
        &self,
        params: ListingParams,
    ) -> ApplicationResult<PaginatedResult<MunicipalServiceDto>> {
        let query = params.into_query(VisibilityFilter::VisibleOnly)?;
        self.run(query).await
    }

    pub async fn list_all_services(
        &self,
        actor: Option<&AuthenticatedUser>,
        params: ListingParams,
    ) -> ApplicationResult<PaginatedResult<MunicipalServiceDto>> {
        require_capability(actor, "services", "view:hidden")?;
        let visibility = params.requested_visibility();
        let query = params.into_query(visibility)?;
        self.run(query).await
    }

    async fn run(
        &self,
        query: ListQuery,
    ) -> ApplicationResult<PaginatedResult<MunicipalServiceDto>> {
        let (services, total) = self.repo.list(&query).await?;
        let names = if services.iter().any(|s| s.category_id.is_some()) {
            self.category_names().await?
        } else {
            Default::default()
        };

        let page = PaginatedResult::new(services, total, query.page).map(|service| {
            let name = service.category_id.and_then(|id| names.get(&id).cloned());
            MunicipalServiceDto::from_service(service, name)
        });
        tracing::debug!(total, page = page.page, "listed services");
        Ok(page)
    }
}
