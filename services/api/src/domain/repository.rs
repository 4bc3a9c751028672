#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    CartItem, MenuItem, MenuItemChanges, Payment, Review, StoreCounts, User,
};
use crate::error::ApiServiceError;

/// Repository for registered accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;
    async fn list(&self) -> Result<Vec<User>, ApiServiceError>;
    async fn create(&self, user: &User) -> Result<(), ApiServiceError>;
    /// Delete an account. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;
    /// Set the stored role to admin. Returns `true` if a row was updated.
    async fn grant_admin(&self, id: Uuid) -> Result<bool, ApiServiceError>;
}

/// Repository for the menu catalog.
pub trait MenuRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MenuItem>, ApiServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, ApiServiceError>;
    /// Batch-resolve ids against the current catalog. Ids with no backing
    /// row are simply absent from the result.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<MenuItem>, ApiServiceError>;
    async fn create(&self, item: &MenuItem) -> Result<(), ApiServiceError>;
    /// Replace the editable fields. Returns `true` if a row was updated.
    async fn update(&self, id: Uuid, changes: &MenuItemChanges) -> Result<bool, ApiServiceError>;
    /// Delete an item. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;
}

/// Repository for cart entries.
pub trait CartRepository: Send + Sync {
    async fn list_by_email(&self, email: &str) -> Result<Vec<CartItem>, ApiServiceError>;
    async fn create(&self, item: &CartItem) -> Result<(), ApiServiceError>;
    /// Update the denormalized price/quantity pair. Returns `true` if a row
    /// was updated.
    async fn update_price_quantity(
        &self,
        id: Uuid,
        price: f64,
        quantity: i32,
    ) -> Result<bool, ApiServiceError>;
    /// Delete one entry. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;
    /// Batch delete by id set, returning the number of rows removed.
    /// Settlement relies on the count to report partial application.
    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, ApiServiceError>;
}

/// Repository for reviews.
pub trait ReviewRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Review>, ApiServiceError>;
    async fn create(&self, review: &Review) -> Result<(), ApiServiceError>;
}

/// Repository for settled payments.
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<(), ApiServiceError>;
    async fn list(&self) -> Result<Vec<Payment>, ApiServiceError>;
    async fn list_by_email(&self, email: &str) -> Result<Vec<Payment>, ApiServiceError>;
}

/// Read-only aggregates for the admin dashboard.
pub trait StatsRepository: Send + Sync {
    async fn counts(&self) -> Result<StoreCounts, ApiServiceError>;
    /// Sum of `price` across all payments. Zero payments yields `0.0`,
    /// never an error.
    async fn total_revenue(&self) -> Result<f64, ApiServiceError>;
}

/// Port for the external payment-intent provider.
pub trait PaymentIntentPort: Send + Sync {
    /// Create an intent for `amount_cents` in `currency`; returns the
    /// redeemable client secret.
    async fn create_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<String, ApiServiceError>;
}
