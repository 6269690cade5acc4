// src/application/queries/municipal/service.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{
        access::can_view_hidden,
        dto::{AuthenticatedUser, MunicipalServiceDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        municipal::{MunicipalService, MunicipalServiceRepository},
    },
};

pub struct MunicipalQueryService {
    pub(super) repo: Arc<dyn MunicipalServiceRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
}

impl MunicipalQueryService {
    pub fn new(
        repo: Arc<dyn MunicipalServiceRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { repo, categories }
    }

    pub(super) fn ensure_visible_to(
        &self,
        actor: Option<&AuthenticatedUser>,
        service: Option<MunicipalService>,
    ) -> ApplicationResult<MunicipalService> {
        match service {
            Some(service) if service.status.is_public() || can_view_hidden(actor, "services") => {
                Ok(service)
            }
            _ => Err(ApplicationError::not_found("service not found")),
        }
    }

    pub(super) async fn to_dto(
        &self,
        service: MunicipalService,
    ) -> ApplicationResult<MunicipalServiceDto> {
        let name = match service.category_id {
            Some(id) => self
                .categories
                .find_by_id(id)
                .await?
                .map(|category| category.name.into_inner()),
            None => None,
        };
        Ok(MunicipalServiceDto::from_service(service, name))
    }

    /// One category lookup per page instead of one per row.
    pub(super) async fn category_names(&self) -> ApplicationResult<HashMap<CategoryId, String>> {
        let categories = self.categories.list_all().await?;
        Ok(categories
            .into_iter()
            .map(|category| (category.id, category.name.into_inner()))
            .collect())
    }
}
