use anyhow::anyhow;
use serde::Deserialize;

use crate::domain::repository::PaymentIntentPort;
use crate::error::ApiServiceError;

/// Payment-intent client speaking the Stripe wire format.
///
/// One `reqwest::Client` lives for the process lifetime and is cloned into
/// handlers together with the rest of `AppState`; clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct StripePaymentIntents {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripePaymentIntents {
    pub fn new(secret_key: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            api_base,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PaymentIntentBody {
    client_secret: String,
}

impl PaymentIntentPort for StripePaymentIntents {
    async fn create_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> Result<String, ApiServiceError> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", currency.to_owned()),
            ("payment_method_types[]", "card".to_owned()),
        ];

        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| ApiServiceError::PaymentProvider(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiServiceError::PaymentProvider(anyhow!(
                "payment intent request failed with {status}: {body}"
            )));
        }

        let intent: PaymentIntentBody = response
            .json()
            .await
            .map_err(|e| ApiServiceError::PaymentProvider(e.into()))?;
        Ok(intent.client_secret)
    }
}
