// src/application/commands/municipal/create.rs
use super::MunicipalCommandService;
use crate::{
    application::{
        access::ensure_capability,
        commands::{
            ImageUpload, should_retry_slug,
            upload::{discard_image, store_image},
        },
        dto::{AuthenticatedUser, MunicipalServiceDto},
        error::ApplicationResult,
    },
    domain::{
        content::{Description, Title},
        municipal::{MunicipalService, NewMunicipalService, ServiceId, ServiceStatus},
    },
};
use uuid::Uuid;

pub struct CreateServiceCommand {
    pub title: String,
    pub description: String,
    pub status: ServiceStatus,
    pub category_id: Option<Uuid>,
    pub image: Option<ImageUpload>,
}

impl MunicipalCommandService {
    pub async fn create_service(
        &self,
        actor: &AuthenticatedUser,
        command: CreateServiceCommand,
    ) -> ApplicationResult<MunicipalServiceDto> {
        ensure_capability(actor, "services", "create")?;

        let title = Title::new(command.title)?;
        let description = Description::new(command.description)?;
        let category_id = self.existing_category(command.category_id).await?;
        let slug = self.unique_slug(&title, None).await?;
        let image = store_image(self.blobs.as_ref(), "services", command.image).await?;
        let now = self.clock.now();

        let draft = NewMunicipalService {
            id: ServiceId::generate(),
            title,
            description,
            status: command.status,
            image: image.clone(),
            slug,
            category_id,
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

        tracing::info!(id = %created.id, slug = %created.slug, actor = %actor.subject, "service created");
        let category_name = self.category_name(&created).await?;
        Ok(MunicipalServiceDto::from_service(created, category_name))
    }

    async fn insert_with_slug_retry(
        &self,
        mut draft: NewMunicipalService,
    ) -> ApplicationResult<MunicipalService> {
        let mut attempts = 0;
        loop {
            match self.repo.insert(draft.clone()).await {
                Err(err) if should_retry_slug(&err, attempts) => {
                    attempts += 1;
                    tracing::warn!(slug = %draft.slug, "service slug taken concurrently, regenerating");
                    let slug = self.unique_slug(&draft.title, None).await?;
                    draft = draft.with_slug(slug);
                }
                result => return Ok(result?),
            }
        }
    }
}
