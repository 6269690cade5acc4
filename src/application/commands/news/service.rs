// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{storage::BlobStore, time::Clock},
    },
    domain::{
        content::Title,
        news::{NewsId, NewsRepository},
        slug::{Slug, SlugService},
    },
};

pub struct NewsCommandService {
    pub(super) repo: Arc<dyn NewsRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) blobs: Arc<dyn BlobStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    pub fn new(
        repo: Arc<dyn NewsRepository>,
        slug_service: Arc<SlugService>,
        blobs: Arc<dyn BlobStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            blobs,
            clock,
        }
    }

    pub(super) async fn unique_slug(
        &self,
        title: &Title,
        excluding: Option<NewsId>,
    ) -> ApplicationResult<Slug> {
        let slug = self
            .slug_service
            .generate_unique(self.repo.as_ref(), title.as_str(), excluding)
            .await?;
        Ok(slug)
    }
}
