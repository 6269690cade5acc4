// src/application/commands/categories/service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::{
        access::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryRepository, ServiceCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
}

pub struct RenameCategoryCommand {
    pub id: Uuid,
    pub name: String,
}

pub struct DeleteCategoryCommand {
    pub id: Uuid,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "create")?;

        let name = CategoryName::new(command.name)?;
        self.ensure_name_free(&name, None).await?;

        // The unique index still guards against a concurrent insert of the same name.
        let created = self.repo.insert(ServiceCategory::new(name)).await?;
        tracing::info!(id = %created.id, name = %created.name, actor = %actor.subject, "category created");
        Ok(created.into())
    }

    pub async fn rename_category(
        &self,
        actor: &AuthenticatedUser,
        command: RenameCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "update")?;

        let id = CategoryId::from(command.id);
        let name = CategoryName::new(command.name)?;
        let mut category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        if category.name == name {
            return Ok(category.into());
        }
        self.ensure_name_free(&name, Some(id)).await?;

        category.rename(name);
        let updated = self.repo.update(category).await?;
        tracing::info!(%id, name = %updated.name, actor = %actor.subject, "category renamed");
        Ok(updated.into())
    }

    /// Services keep their `category_id`; reads then report no category name.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "delete")?;

        let id = CategoryId::from(command.id);
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(%id, actor = %actor.subject, "category deleted");
        Ok(())
    }

    async fn ensure_name_free(
        &self,
        name: &CategoryName,
        excluding: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        match self.repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != excluding => Err(ApplicationError::conflict(
                format!("category '{name}' already exists"),
            )),
            _ => Ok(()),
        }
    }
}
