use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::review::{CreateReviewInput, CreateReviewUseCase, ListReviewsUseCase};

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub rating: i16,
    #[serde(serialize_with = "bistro_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// ── GET /reviews ─────────────────────────────────────────────────────────────

pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, ApiServiceError> {
    let reviews = ListReviewsUseCase {
        repo: state.review_repo(),
    }
    .execute()
    .await?;
    Ok(Json(
        reviews
            .into_iter()
            .map(|r| ReviewResponse {
                id: r.id,
                name: r.name,
                details: r.details,
                rating: r.rating,
                created_at: r.created_at,
            })
            .collect(),
    ))
}

// ── POST /reviews ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub name: String,
    pub details: String,
    pub rating: i16,
}

#[derive(Serialize)]
pub struct CreateReviewResponse {
    pub id: Uuid,
}

pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let id = CreateReviewUseCase {
        repo: state.review_repo(),
    }
    .execute(CreateReviewInput {
        name: body.name,
        details: body.details,
        rating: body.rating,
    })
    .await?;
    Ok((StatusCode::CREATED, Json(CreateReviewResponse { id })))
}
