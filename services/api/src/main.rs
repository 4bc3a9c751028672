use sea_orm::Database;
use tracing::info;

use bistro_api::config::ApiConfig;
use bistro_api::infra::stripe::StripePaymentIntents;
use bistro_api::router::{build_router, cors_layer};
use bistro_api::state::AppState;

#[tokio::main]
async fn main() {
    bistro_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let payment_intents =
        StripePaymentIntents::new(config.stripe_secret_key.clone(), config.stripe_api_base.clone());

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
        payment_intents,
    };

    let router = build_router(state, cors_layer(&config.cors_allowed_origins));
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
