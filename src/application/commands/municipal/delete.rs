// src/application/commands/municipal/delete.rs
use super::MunicipalCommandService;
use crate::{
    application::{
        access::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::municipal::ServiceId,
};
use uuid::Uuid;

pub struct DeleteServiceCommand {
    pub id: Uuid,
}

impl MunicipalCommandService {
    pub async fn delete_service(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteServiceCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "services", "delete")?;

        let id = ServiceId::from(command.id);
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("service not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(%id, actor = %actor.subject, "service deleted");
        Ok(())
    }
}
