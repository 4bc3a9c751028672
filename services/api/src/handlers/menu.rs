use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{MenuItem, MenuItemChanges};
use crate::error::ApiServiceError;
use crate::handlers::authenticate;
use crate::state::AppState;
use crate::usecase::access::RequireAdminUseCase;
use crate::usecase::menu::{
    CreateMenuItemInput, CreateMenuItemUseCase, DeleteMenuItemUseCase, GetMenuItemUseCase,
    ListMenuUseCase, UpdateMenuItemUseCase,
};

#[derive(Serialize)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub recipe: String,
    pub price: f64,
    pub category: String,
    #[serde(serialize_with = "bistro_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            recipe: item.recipe,
            price: item.price,
            category: item.category,
            created_at: item.created_at,
        }
    }
}

// ── GET /menu ────────────────────────────────────────────────────────────────

pub async fn list_menu(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItemResponse>>, ApiServiceError> {
    let items = ListMenuUseCase {
        repo: state.menu_repo(),
    }
    .execute()
    .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /menu/{id} ───────────────────────────────────────────────────────────

pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuItemResponse>, ApiServiceError> {
    let item = GetMenuItemUseCase {
        repo: state.menu_repo(),
    }
    .execute(id)
    .await?;
    Ok(Json(item.into()))
}

// ── POST /menu ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub recipe: String,
    pub price: f64,
    pub category: String,
}

#[derive(Serialize)]
pub struct CreateMenuItemResponse {
    pub id: Uuid,
}

pub async fn create_menu_item(
    headers: HeaderMap,
    State(state): State<AppState>,
    Json(body): Json<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let identity = authenticate(&headers, &state.jwt_secret)?;
    RequireAdminUseCase {
        repo: state.user_repo(),
    }
    .execute(&identity.email)
    .await?;

    let id = CreateMenuItemUseCase {
        repo: state.menu_repo(),
    }
    .execute(CreateMenuItemInput {
        name: body.name,
        recipe: body.recipe,
        price: body.price,
        category: body.category,
    })
    .await?;
    Ok((StatusCode::CREATED, Json(CreateMenuItemResponse { id })))
}

// ── PATCH /menu/{id} ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMenuItemRequest {
    pub name: String,
    pub recipe: String,
    pub price: f64,
    pub category: String,
}

pub async fn update_menu_item(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateMenuItemRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let identity = authenticate(&headers, &state.jwt_secret)?;
    RequireAdminUseCase {
        repo: state.user_repo(),
    }
    .execute(&identity.email)
    .await?;

    UpdateMenuItemUseCase {
        repo: state.menu_repo(),
    }
    .execute(
        id,
        MenuItemChanges {
            name: body.name,
            recipe: body.recipe,
            price: body.price,
            category: body.category,
        },
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /menu/{id} ────────────────────────────────────────────────────────

pub async fn delete_menu_item(
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

    DeleteMenuItemUseCase {
        repo: state.menu_repo(),
    }
    .execute(id)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
