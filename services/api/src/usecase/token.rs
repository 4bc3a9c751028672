use bistro_auth_types::token::issue_token;
use bistro_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::error::ApiServiceError;

// ── IssueToken ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct IssueTokenOutput {
    pub token: String,
    pub access_token_exp: u64,
}

pub struct IssueTokenUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> IssueTokenUseCase<R> {
    /// Sign a bearer token for the given email.
    ///
    /// The role claim is read from the store, so a token never grants more
    /// than the stored record does at issuance time. Unknown emails get a
    /// customer-role token; registration is a separate, idempotent step.
    pub async fn execute(&self, email: &str) -> Result<IssueTokenOutput, ApiServiceError> {
        let role = self
            .repo
            .find_by_email(email)
            .await?
            .map(|u| u.role)
            .unwrap_or(UserRole::Customer);
        let (token, access_token_exp) = issue_token(email, role.as_str(), &self.jwt_secret)
            .map_err(|e| ApiServiceError::Internal(e.into()))?;
        Ok(IssueTokenOutput {
            token,
            access_token_exp,
        })
    }
}
