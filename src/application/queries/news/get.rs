// src/application/queries/news/get.rs
use uuid::Uuid;

use super::NewsQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, NewsItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{news::NewsId, slug::Slug},
};

impl NewsQueryService {
    pub async fn get_news_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: &str,
    ) -> ApplicationResult<NewsItemDto> {
        // A malformed slug cannot match any stored item.
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("news item not found"))?;
        let item = self.repo.find_by_slug(&slug).await?;
        Ok(self.ensure_visible_to(actor, item)?.into())
    }

    pub async fn get_news_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: Uuid,
    ) -> ApplicationResult<NewsItemDto> {
        let item = self.repo.find_by_id(NewsId::from(id)).await?;
        Ok(self.ensure_visible_to(actor, item)?.into())
    }
}
