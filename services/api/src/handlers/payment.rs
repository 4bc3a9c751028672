use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{CartCleanup, Payment};
use crate::error::ApiServiceError;
use crate::handlers::authenticate;
use crate::state::AppState;
use crate::usecase::access::ensure_self;
use crate::usecase::payment::{
    CreatePaymentIntentUseCase, ListPaymentsUseCase, SettlePaymentInput, SettlePaymentUseCase,
};

#[derive(Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub menu_item_ids: Vec<Uuid>,
    pub cart_item_ids: Vec<Uuid>,
    #[serde(serialize_with = "bistro_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            email: p.email,
            price: p.price,
            transaction_id: p.transaction_id,
            menu_item_ids: p.menu_item_ids,
            cart_item_ids: p.cart_item_ids,
            created_at: p.created_at,
        }
    }
}

// ── POST /create-payment-intent ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub price: f64,
}

#[derive(Serialize)]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(body): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, ApiServiceError> {
    let client_secret = CreatePaymentIntentUseCase {
        provider: state.payment_intents.clone(),
    }
    .execute(body.price)
    .await?;
    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}

// ── GET /payments ────────────────────────────────────────────────────────────

pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentResponse>>, ApiServiceError> {
    let payments = ListPaymentsUseCase {
        repo: state.payment_repo(),
    }
    .execute()
    .await?;
    Ok(Json(payments.into_iter().map(Into::into).collect()))
}

// ── GET /payments/{email} ────────────────────────────────────────────────────

pub async fn list_payments_by_email(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<PaymentResponse>>, ApiServiceError> {
    let identity = authenticate(&headers, &state.jwt_secret)?;
    // Callers only see their own payment history, whether or not any exists.
    ensure_self(&identity.email, &email)?;
    let payments = ListPaymentsUseCase {
        repo: state.payment_repo(),
    }
    .execute_for_email(&email)
    .await?;
    Ok(Json(payments.into_iter().map(Into::into).collect()))
}

// ── POST /payments ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SettlePaymentRequest {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub menu_item_ids: Vec<Uuid>,
    pub cart_item_ids: Vec<Uuid>,
}

/// Composite settlement result: insert outcome plus cleanup outcome, so the
/// caller can detect partial application (some cart ids already gone, or
/// cleanup failed outright while the payment stands).
#[derive(Serialize)]
pub struct SettlePaymentResponse {
    pub payment_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_items_removed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_cleanup_error: Option<String>,
}

pub async fn settle_payment(
    State(state): State<AppState>,
    Json(body): Json<SettlePaymentRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let outcome = SettlePaymentUseCase {
        payments: state.payment_repo(),
        carts: state.cart_repo(),
    }
    .execute(SettlePaymentInput {
        email: body.email,
        price: body.price,
        transaction_id: body.transaction_id,
        menu_item_ids: body.menu_item_ids,
        cart_item_ids: body.cart_item_ids,
    })
    .await?;

    let response = match outcome.cart_cleanup {
        CartCleanup::Completed { removed } => SettlePaymentResponse {
            payment_id: outcome.payment_id,
            cart_items_removed: Some(removed),
            cart_cleanup_error: None,
        },
        CartCleanup::Failed { message } => SettlePaymentResponse {
            payment_id: outcome.payment_id,
            cart_items_removed: None,
            cart_cleanup_error: Some(message),
        },
    };
    Ok((StatusCode::CREATED, Json(response)))
}
