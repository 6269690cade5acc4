// src/application/queries/municipal/get.rs
use uuid::Uuid;

use super::MunicipalQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, MunicipalServiceDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{municipal::ServiceId, slug::Slug},
};

impl MunicipalQueryService {
    pub async fn get_service_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: &str,
    ) -> ApplicationResult<MunicipalServiceDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("service not found"))?;
        let service = self.repo.find_by_slug(&slug).await?;
        let service = self.ensure_visible_to(actor, service)?;
        self.to_dto(service).await
    }

    pub async fn get_service_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> ApplicationResult<MunicipalServiceDto> {
        let service = self.repo.find_by_id(ServiceId::from(id)).await?;
        let service = self.ensure_visible_to(actor, service)?;
        self.to_dto(service).await
    }
}
