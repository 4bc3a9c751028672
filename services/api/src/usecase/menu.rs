use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::MenuRepository;
use crate::domain::types::{MenuItem, MenuItemChanges};
use crate::error::ApiServiceError;

// ── ListMenu ─────────────────────────────────────────────────────────────────

pub struct ListMenuUseCase<R: MenuRepository> {
    pub repo: R,
}

impl<R: MenuRepository> ListMenuUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<MenuItem>, ApiServiceError> {
        self.repo.list().await
    }
}

// ── GetMenuItem ──────────────────────────────────────────────────────────────

pub struct GetMenuItemUseCase<R: MenuRepository> {
    pub repo: R,
}

impl<R: MenuRepository> GetMenuItemUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<MenuItem, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::MenuItemNotFound)
    }
}

// ── CreateMenuItem ───────────────────────────────────────────────────────────

pub struct CreateMenuItemInput {
    pub name: String,
    pub recipe: String,
    pub price: f64,
    pub category: String,
}

pub struct CreateMenuItemUseCase<R: MenuRepository> {
    pub repo: R,
}

impl<R: MenuRepository> CreateMenuItemUseCase<R> {
    pub async fn execute(&self, input: CreateMenuItemInput) -> Result<Uuid, ApiServiceError> {
        let item = MenuItem {
            id: Uuid::now_v7(),
            name: input.name,
            recipe: input.recipe,
            price: input.price,
            category: input.category,
            created_at: Utc::now(),
        };
        self.repo.create(&item).await?;
        Ok(item.id)
    }
}

// ── UpdateMenuItem ───────────────────────────────────────────────────────────

pub struct UpdateMenuItemUseCase<R: MenuRepository> {
    pub repo: R,
}

impl<R: MenuRepository> UpdateMenuItemUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: MenuItemChanges,
    ) -> Result<(), ApiServiceError> {
        if !self.repo.update(id, &changes).await? {
            return Err(ApiServiceError::MenuItemNotFound);
        }
        Ok(())
    }
}

// ── DeleteMenuItem ───────────────────────────────────────────────────────────

pub struct DeleteMenuItemUseCase<R: MenuRepository> {
    pub repo: R,
}

impl<R: MenuRepository> DeleteMenuItemUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::MenuItemNotFound);
        }
        Ok(())
    }
}
