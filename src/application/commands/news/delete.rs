// src/application/commands/news/delete.rs
use super::NewsCommandService;
use crate::{
    application::{
        access::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::NewsId,
};
use uuid::Uuid;

pub struct DeleteNewsCommand {
    pub id: Uuid,
}

impl NewsCommandService {
    pub async fn delete_news(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteNewsCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "news", "delete")?;

        let id = NewsId::from(command.id);
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(%id, actor = %actor.subject, "news item deleted");
        Ok(())
    }
}
