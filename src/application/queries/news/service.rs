// src/application/queries/news/service.rs
use std::sync::Arc;

use crate::{
    application::{
        access::can_view_hidden,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::{NewsItem, NewsRepository},
};

pub struct NewsQueryService {
    pub(super) repo: Arc<dyn NewsRepository>,
}

impl NewsQueryService {
    pub fn new(repo: Arc<dyn NewsRepository>) -> Self {
        Self { repo }
    }

    /// Hidden items look exactly like missing ones to callers who may not see them.
    pub(super) fn ensure_visible_to(
        &self,
        actor: Option<&AuthenticatedUser>,
        item: Option<NewsItem>,
    ) -> ApplicationResult<NewsItem> {
        match item {
            Some(item) if item.visibility || can_view_hidden(actor, "news") => Ok(item),
            _ => Err(ApplicationError::not_found("news item not found")),
        }
    }
}
