// src/application/commands/news/update.rs
use super::NewsCommandService;
use crate::{
    application::{
        access::ensure_capability,
        commands::should_retry_slug,
        dto::{AuthenticatedUser, NewsItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{Description, ImageRef, Title},
        news::{NewsId, NewsItem, NewsItemUpdate},
    },
};
use uuid::Uuid;

pub struct UpdateNewsCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<bool>,
    pub image_url: Option<String>,
}

impl NewsCommandService {
    pub async fn update_news(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateNewsCommand,
    ) -> ApplicationResult<NewsItemDto> {
        ensure_capability(actor, "news", "update")?;

        let UpdateNewsCommand {
            id,
            title,
            description,
            visibility,
            image_url,
        } = command;
        let id = NewsId::from(id);

        let title = title.map(Title::new).transpose()?;
        let description = description.map(Description::new).transpose()?;
        let image = image_url.map(ImageRef::new).transpose()?;

        let before = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;
        let mut item = before.clone();
        let now = self.clock.now();

        let renamed = match title {
            Some(title) if title != item.title => {
                let slug = self.unique_slug(&title, Some(id)).await?;
                item.rename(title, slug, now);
                true
            }
            _ => false,
        };
        let mut changed = renamed;
        if let Some(description) = description.filter(|d| *d != item.description) {
            item.set_description(description, now);
            changed = true;
        }
        if let Some(visibility) = visibility.filter(|v| *v != item.visibility) {
            item.set_visibility(visibility, now);
            changed = true;
        }
        if let Some(image) = image.filter(|i| item.image.as_ref() != Some(i)) {
            item.set_image(Some(image), now);
            changed = true;
        }

        if !changed {
            return Ok(before.into());
        }

        let updated = self
            .persist(NewsItemUpdate::diff(&before, &item), &item, renamed)
            .await?;
        tracing::info!(%id, slug = %updated.slug, actor = %actor.subject, "news item updated");
        Ok(updated.into())
    }

    async fn persist(
        &self,
        mut update: NewsItemUpdate,
        item: &NewsItem,
        renamed: bool,
    ) -> ApplicationResult<NewsItem> {
        let mut attempts = 0;
        loop {
            match self.repo.update(update.clone()).await {
                Err(err) if renamed && should_retry_slug(&err, attempts) => {
                    attempts += 1;
                    tracing::warn!(id = %item.id, "news slug taken concurrently, regenerating");
                    let slug = self.unique_slug(&item.title, Some(item.id)).await?;
                    update = update.with_slug(slug);
                }
                result => return Ok(result?),
            }
        }
    }
}
