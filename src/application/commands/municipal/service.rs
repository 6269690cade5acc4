// src/application/commands/municipal/service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{storage::BlobStore, time::Clock},
    },
    domain::{
        category::{CategoryId, CategoryRepository},
        content::Title,
        municipal::{MunicipalService, MunicipalServiceRepository, ServiceId},
        slug::{Slug, SlugService},
    },
};

pub struct MunicipalCommandService {
    pub(super) repo: Arc<dyn MunicipalServiceRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) blobs: Arc<dyn BlobStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl MunicipalCommandService {
    pub fn new(
        repo: Arc<dyn MunicipalServiceRepository>,
        categories: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        blobs: Arc<dyn BlobStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            categories,
            slug_service,
            blobs,
            clock,
        }
    }

    pub(super) async fn unique_slug(
        &self,
        title: &Title,
        excluding: Option<ServiceId>,
    ) -> ApplicationResult<Slug> {
        let slug = self
            .slug_service
            .generate_unique(self.repo.as_ref(), title.as_str(), excluding)
            .await?;
        Ok(slug)
    }

    /// Category references are checked at write time only; deletes do not cascade.
    pub(super) async fn existing_category(
        &self,
        category_id: Option<Uuid>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(id) = category_id.map(CategoryId::from) else {
            return Ok(None);
        };
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(Some(id)),
            None => Err(ApplicationError::validation(format!(
                "category_id: category {id} does not exist"
            ))),
        }
    }

    pub(super) async fn category_name(
        &self,
        service: &MunicipalService,
    ) -> ApplicationResult<Option<String>> {
        let Some(id) = service.category_id else {
            return Ok(None);
        };
        let category = self.categories.find_by_id(id).await?;
        Ok(category.map(|category| category.name.into_inner()))
    }
}
