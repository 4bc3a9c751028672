use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiServiceError;

/// Identity self-match guard for owner-scoped routes.
///
/// The verified token identity must equal the email addressed by the path,
/// regardless of whether any data exists under it.
pub fn ensure_self(token_email: &str, requested_email: &str) -> Result<(), ApiServiceError> {
    if token_email != requested_email {
        return Err(ApiServiceError::Forbidden);
    }
    Ok(())
}

/// Confirm the caller holds the admin role.
///
/// The stored user record is authoritative, not the role claim in the
/// bearer token — a promotion or deletion takes effect on the next request
/// without reissuing tokens.
pub struct RequireAdminUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RequireAdminUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<User, ApiServiceError> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(ApiServiceError::Forbidden)?;
        if !user.role.is_admin() {
            return Err(ApiServiceError::Forbidden);
        }
        Ok(user)
    }
}
