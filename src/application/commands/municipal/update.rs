// src/application/commands/municipal/update.rs
use super::MunicipalCommandService;
use crate::{
    application::{
        access::ensure_capability,
        commands::should_retry_slug,
        dto::{AuthenticatedUser, MunicipalServiceDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{Description, ImageRef, Title},
        municipal::{MunicipalService, MunicipalServiceUpdate, ServiceId, ServiceStatus},
    },
};
use uuid::Uuid;

pub struct UpdateServiceCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ServiceStatus>,
    pub image_url: Option<String>,
    /// `Some(None)` detaches the service from its category.
    pub category_id: Option<Option<Uuid>>,
}

impl MunicipalCommandService {
    pub async fn update_service(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateServiceCommand,
    ) -> ApplicationResult<MunicipalServiceDto> {
        ensure_capability(actor, "services", "update")?;

        let UpdateServiceCommand {
            id,
            title,
            description,
            status,
            image_url,
            category_id,
        } = command;
        let id = ServiceId::from(id);

        let title = title.map(Title::new).transpose()?;
        let description = description.map(Description::new).transpose()?;
        let image = image_url.map(ImageRef::new).transpose()?;

        let before = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("service not found"))?;
        let category_id = match category_id {
            Some(requested) => Some(self.existing_category(requested).await?),
            None => None,
        };

        let mut service = before.clone();
        let now = self.clock.now();

        let renamed = match title {
            Some(title) if title != service.title => {
                let slug = self.unique_slug(&title, Some(id)).await?;
                service.rename(title, slug, now);
                true
            }
            _ => false,
        };
        let mut changed = renamed;
        if let Some(description) = description.filter(|d| *d != service.description) {
            service.set_description(description, now);
            changed = true;
        }
        if let Some(status) = status.filter(|s| *s != service.status) {
            service.set_status(status, now);
            changed = true;
        }
        if let Some(image) = image.filter(|i| service.image.as_ref() != Some(i)) {
            service.set_image(Some(image), now);
            changed = true;
        }
        if let Some(category_id) = category_id.filter(|c| *c != service.category_id) {
            service.assign_category(category_id, now);
            changed = true;
        }

        let updated = if changed {
            let update = MunicipalServiceUpdate::diff(&before, &service);
            let updated = self.persist(update, &service, renamed).await?;
            tracing::info!(%id, slug = %updated.slug, actor = %actor.subject, "service updated");
            updated
        } else {
            before
        };

        let category_name = self.category_name(&updated).await?;
        Ok(MunicipalServiceDto::from_service(updated, category_name))
    }

    async fn persist(
        &self,
        mut update: MunicipalServiceUpdate,
        service: &MunicipalService,
        renamed: bool,
    ) -> ApplicationResult<MunicipalService> {
        let mut attempts = 0;
        loop {
            match self.repo.update(update.clone()).await {
                Err(err) if renamed && should_retry_slug(&err, attempts) => {
                    attempts += 1;
                    tracing::warn!(id = %service.id, "service slug taken concurrently, regenerating");
                    let slug = self.unique_slug(&service.title, Some(service.id)).await?;
                    update = update.with_slug(slug);
                }
                result => return Ok(result?),
            }
        }
    }
}
