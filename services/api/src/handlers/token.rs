use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::token::IssueTokenUseCase;

// ── POST /jwt ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IssueTokenRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct IssueTokenResponse {
    pub token: String,
}

pub async fn issue_token(
    State(state): State<AppState>,
    Json(body): Json<IssueTokenRequest>,
) -> Result<Json<IssueTokenResponse>, ApiServiceError> {
    let usecase = IssueTokenUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&body.email).await?;
    Ok(Json(IssueTokenResponse { token: out.token }))
}
