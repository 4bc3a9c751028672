use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bistro_core::health::{healthz, readyz};
use bistro_core::middleware::request_id_layer;

use crate::handlers::{
    cart::{add_cart_item, list_cart, remove_cart_item, update_cart_item},
    menu::{create_menu_item, delete_menu_item, get_menu_item, list_menu, update_menu_item},
    payment::{create_payment_intent, list_payments, list_payments_by_email, settle_payment},
    review::{create_review, list_reviews},
    stats::{admin_stats, order_stats},
    token::issue_token,
    user::{check_admin, create_user, delete_user, list_users, promote_user},
};
use crate::state::AppState;

/// Build the CORS layer from the configured origin list.
///
/// An empty list means permissive — local development against arbitrary
/// frontend ports.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Token issuance
        .route("/jwt", post(issue_token))
        // Users
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/admin/{email}", get(check_admin))
        .route("/users/{id}/admin", patch(promote_user))
        .route("/users/{id}", delete(delete_user))
        // Menu
        .route("/menu", get(list_menu))
        .route("/menu", post(create_menu_item))
        .route("/menu/{id}", get(get_menu_item))
        .route("/menu/{id}", patch(update_menu_item))
        .route("/menu/{id}", delete(delete_menu_item))
        // Carts
        .route("/carts", get(list_cart))
        .route("/carts", post(add_cart_item))
        .route("/carts/{id}", patch(update_cart_item))
        .route("/carts/{id}", delete(remove_cart_item))
        // Reviews
        .route("/reviews", get(list_reviews))
        .route("/reviews", post(create_review))
        // Payments
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payments", get(list_payments))
        .route("/payments", post(settle_payment))
        .route("/payments/{email}", get(list_payments_by_email))
        // Stats
        .route("/admin_stats", get(admin_stats))
        .route("/order_stats", get(order_stats))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
