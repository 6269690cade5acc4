// src/application/commands/news/create.rs
use super::NewsCommandService;
use crate::{
    application::{
        access::ensure_capability,
        commands::{
            ImageUpload, should_retry_slug,
            upload::{discard_image, store_image},
        },
        dto::{AuthenticatedUser, NewsItemDto},
        error::ApplicationResult,
    },
    domain::{
        content::{Description, Title},
        news::{NewNewsItem, NewsId, NewsItem},
    },
};

pub struct CreateNewsCommand {
    pub title: String,
    pub description: String,
    pub visibility: bool,
    pub image: Option<ImageUpload>,
}

impl NewsCommandService {
    pub async fn create_news(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNewsCommand,
    ) -> ApplicationResult<NewsItemDto> {
        ensure_capability(actor, "news", "create")?;

        let title = Title::new(command.title)?;
        let description = Description::new(command.description)?;
        let slug = self.unique_slug(&title, None).await?;
        let image = store_image(self.blobs.as_ref(), "news", command.image).await?;
        let now = self.clock.now();

        let draft = NewNewsItem {
            id: NewsId::generate(),
            title,
            description,
            visibility: command.visibility,
            image: image.clone(),
            slug,
            created_at: now,
            updated_at: now,
        };

        let created = match self.insert_with_slug_retry(draft).await {
            Ok(created) => created,
            Err(err) => {
                discard_image(self.blobs.as_ref(), image.as_ref()).await;
                return Err(err);
            }
        };

        tracing::info!(id = %created.id, slug = %created.slug, actor = %actor.subject, "news item created");
        Ok(created.into())
    }

    async fn insert_with_slug_retry(&self, mut draft: NewNewsItem) -> ApplicationResult<NewsItem> {
        let mut attempts = 0;
        loop {
            match self.repo.insert(draft.clone()).await {
                Err(err) if should_retry_slug(&err, attempts) => {
                    attempts += 1;
                    tracing::warn!(slug = %draft.slug, "news slug taken concurrently, regenerating");
                    let slug = self.unique_slug(&draft.title, None).await?;
                    draft = draft.with_slug(slug);
                }
                result => return Ok(result?),
            }
        }
    }
}
