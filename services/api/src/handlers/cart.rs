use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::CartItem;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::cart::{
    AddCartItemInput, AddCartItemUseCase, ListCartUseCase, RemoveCartItemUseCase,
    UpdateCartItemUseCase,
};

#[derive(Serialize)]
pub struct CartItemResponse {
    pub id: Uuid,
    pub email: String,
    pub menu_item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    #[serde(serialize_with = "bistro_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            email: item.email,
            menu_item_id: item.menu_item_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            created_at: item.created_at,
        }
    }
}

// ── GET /carts?email= ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListCartQuery {
    pub email: String,
}

pub async fn list_cart(
    State(state): State<AppState>,
    Query(query): Query<ListCartQuery>,
) -> Result<Json<Vec<CartItemResponse>>, ApiServiceError> {
    let items = ListCartUseCase {
        repo: state.cart_repo(),
    }
    .execute(&query.email)
    .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── POST /carts ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddCartItemRequest {
    pub email: String,
    pub menu_item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: Option<i32>,
}

#[derive(Serialize)]
pub struct AddCartItemResponse {
    pub id: Uuid,
}

pub async fn add_cart_item(
    State(state): State<AppState>,
    Json(body): Json<AddCartItemRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let id = AddCartItemUseCase {
        repo: state.cart_repo(),
    }
    .execute(AddCartItemInput {
        email: body.email,
        menu_item_id: body.menu_item_id,
        name: body.name,
        price: body.price,
        quantity: body.quantity.unwrap_or(1),
    })
    .await?;
    Ok((StatusCode::CREATED, Json(AddCartItemResponse { id })))
}

// ── PATCH /carts/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCartItemRequest {
    pub price: f64,
    pub quantity: i32,
}

pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCartItemRequest>,
) -> Result<StatusCode, ApiServiceError> {
    UpdateCartItemUseCase {
        repo: state.cart_repo(),
    }
    .execute(id, body.price, body.quantity)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /carts/{id} ───────────────────────────────────────────────────────

pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiServiceError> {
    RemoveCartItemUseCase {
        repo: state.cart_repo(),
    }
    .execute(id)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
