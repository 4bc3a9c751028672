use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ReviewRepository;
use crate::domain::types::Review;
use crate::error::ApiServiceError;

// ── ListReviews ──────────────────────────────────────────────────────────────

pub struct ListReviewsUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> ListReviewsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Review>, ApiServiceError> {
        self.repo.list().await
    }
}

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewInput {
    pub name: String,
    pub details: String,
    pub rating: i16,
}

pub struct CreateReviewUseCase<R: ReviewRepository> {
    pub repo: R,
}

impl<R: ReviewRepository> CreateReviewUseCase<R> {
    pub async fn execute(&self, input: CreateReviewInput) -> Result<Uuid, ApiServiceError> {
        let review = Review {
            id: Uuid::now_v7(),
            name: input.name,
            details: input.details,
            rating: input.rating,
            created_at: Utc::now(),
        };
        self.repo.create(&review).await?;
        Ok(review.id)
    }
}
