use chrono::Utc;
use uuid::Uuid;

use bistro_domain::money::amount_in_cents;

use crate::domain::repository::{CartRepository, PaymentIntentPort, PaymentRepository};
use crate::domain::types::{CartCleanup, Payment, SettlementOutcome};
use crate::error::ApiServiceError;

// ── CreatePaymentIntent ──────────────────────────────────────────────────────

pub struct CreatePaymentIntentUseCase<P: PaymentIntentPort> {
    pub provider: P,
}

impl<P: PaymentIntentPort> CreatePaymentIntentUseCase<P> {
    /// Ask the provider for an intent covering `price` and return the
    /// redeemable client secret.
    pub async fn execute(&self, price: f64) -> Result<String, ApiServiceError> {
        let cents = amount_in_cents(price).ok_or(ApiServiceError::InvalidAmount)?;
        self.provider.create_intent(cents, "usd").await
    }
}

// ── SettlePayment ────────────────────────────────────────────────────────────

pub struct SettlePaymentInput {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub menu_item_ids: Vec<Uuid>,
    pub cart_item_ids: Vec<Uuid>,
}

pub struct SettlePaymentUseCase<P: PaymentRepository, C: CartRepository> {
    pub payments: P,
    pub carts: C,
}

impl<P: PaymentRepository, C: CartRepository> SettlePaymentUseCase<P, C> {
    /// Record the payment, then purge the cart entries it consumed.
    ///
    /// Effect ordering is load-bearing: the insert is the durability-
    /// critical step, and once it succeeds the payment has happened no
    /// matter what the cleanup does. A cleanup failure is surfaced in the
    /// outcome but never rolls the payment back; a crash between the two
    /// steps leaves stale cart rows, not lost money.
    pub async fn execute(
        &self,
        input: SettlePaymentInput,
    ) -> Result<SettlementOutcome, ApiServiceError> {
        let payment = Payment {
            id: Uuid::now_v7(),
            email: input.email,
            price: input.price,
            transaction_id: input.transaction_id,
            menu_item_ids: input.menu_item_ids,
            cart_item_ids: input.cart_item_ids,
            created_at: Utc::now(),
        };
        self.payments.create(&payment).await?;

        let cart_cleanup = match self.carts.delete_many(&payment.cart_item_ids).await {
            Ok(removed) => CartCleanup::Completed { removed },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    payment_id = %payment.id,
                    "cart cleanup failed after payment insert"
                );
                CartCleanup::Failed {
                    message: e.to_string(),
                }
            }
        };

        Ok(SettlementOutcome {
            payment_id: payment.id,
            cart_cleanup,
        })
    }
}

// ── ListPayments ─────────────────────────────────────────────────────────────

pub struct ListPaymentsUseCase<P: PaymentRepository> {
    pub repo: P,
}

impl<P: PaymentRepository> ListPaymentsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Payment>, ApiServiceError> {
        self.repo.list().await
    }

    pub async fn execute_for_email(&self, email: &str) -> Result<Vec<Payment>, ApiServiceError> {
        self.repo.list_by_email(email).await
    }
}
