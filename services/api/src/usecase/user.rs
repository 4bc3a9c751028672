use chrono::Utc;
use uuid::Uuid;

use bistro_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiServiceError;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    /// Idempotent registration: an email that already has an account is a
    /// no-op reporting no new identifier.
    pub async fn execute(&self, input: RegisterUserInput) -> Result<Option<Uuid>, ApiServiceError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Ok(None);
        }
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            role: UserRole::Customer,
            created_at: Utc::now(),
        };
        self.repo.create(&user).await?;
        Ok(Some(user.id))
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiServiceError> {
        self.repo.list().await
    }
}

// ── CheckAdmin ───────────────────────────────────────────────────────────────

pub struct CheckAdminUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CheckAdminUseCase<R> {
    /// Report whether the stored record carries the admin role. An unknown
    /// email is simply not an admin, never an error.
    pub async fn execute(&self, email: &str) -> Result<bool, ApiServiceError> {
        let user = self.repo.find_by_email(email).await?;
        Ok(user.map(|u| u.role.is_admin()).unwrap_or(false))
    }
}

// ── PromoteUser ──────────────────────────────────────────────────────────────

pub struct PromoteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> PromoteUserUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiServiceError> {
        if !self.repo.grant_admin(id).await? {
            return Err(ApiServiceError::UserNotFound);
        }
        Ok(())
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::UserNotFound);
        }
        Ok(())
    }
}
