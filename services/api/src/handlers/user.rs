use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiServiceError;
use crate::handlers::authenticate;
use crate::state::AppState;
use crate::usecase::access::{RequireAdminUseCase, ensure_self};
use crate::usecase::user::{
    CheckAdminUseCase, DeleteUserUseCase, ListUsersUseCase, PromoteUserUseCase,
    RegisterUserInput, RegisterUserUseCase,
};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(serialize_with = "bistro_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct RegisterUserResponse {
    /// `null` when the email was already registered (idempotent no-op).
    pub inserted_id: Option<Uuid>,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let inserted_id = usecase
        .execute(RegisterUserInput {
            name: body.name,
            email: body.email,
        })
        .await?;
    let status = if inserted_id.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(RegisterUserResponse { inserted_id })))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiServiceError> {
    let identity = authenticate(&headers, &state.jwt_secret)?;
    RequireAdminUseCase {
        repo: state.user_repo(),
    }
    .execute(&identity.email)
    .await?;

    let users = ListUsersUseCase {
        repo: state.user_repo(),
    }
    .execute()
    .await?;
    Ok(Json(
        users
            .into_iter()
            .map(|u| UserResponse {
                id: u.id,
                name: u.name,
                email: u.email,
                role: u.role.as_str().to_owned(),
                created_at: u.created_at,
            })
            .collect(),
    ))
}

// ── GET /users/admin/{email} ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

pub async fn check_admin(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, ApiServiceError> {
    let identity = authenticate(&headers, &state.jwt_secret)?;
    ensure_self(&identity.email, &email)?;
    let admin = CheckAdminUseCase {
        repo: state.user_repo(),
    }
    .execute(&email)
    .await?;
    Ok(Json(AdminStatusResponse { admin }))
}

// ── PATCH /users/{id}/admin ──────────────────────────────────────────────────

pub async fn promote_user(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiServiceError> {
    let identity = authenticate(&headers, &state.jwt_secret)?;
    RequireAdminUseCase {
        repo: state.user_repo(),
    }
    .execute(&identity.email)
    .await?;

    PromoteUserUseCase {
        repo: state.user_repo(),
    }
    .execute(id)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/{id} ───────────────────────────────────────────────────────

pub async fn delete_user(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiServiceError> {
    let identity = authenticate(&headers, &state.jwt_secret)?;
    RequireAdminUseCase {
        repo: state.user_repo(),
    }
    .execute(&identity.email)
    .await?;

    DeleteUserUseCase {
        repo: state.user_repo(),
    }
    .execute(id)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
