use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden access")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("menu item not found")]
    MenuItemNotFound,
    #[error("cart item not found")]
    CartItemNotFound,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("payment provider error")]
    PaymentProvider(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::MenuItemNotFound => "MENU_ITEM_NOT_FOUND",
            Self::CartItemNotFound => "CART_ITEM_NOT_FOUND",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::PaymentProvider(_) => "PAYMENT_PROVIDER",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::MenuItemNotFound | Self::CartItemNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidAmount => StatusCode::BAD_REQUEST,
            Self::PaymentProvider(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here
        // would be noise.
        match &self {
            Self::Internal(e) | Self::PaymentProvider(e) => {
                tracing::error!(error = %e, kind = self.kind(), "request failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
