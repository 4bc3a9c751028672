use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::stats::{AdminStatsUseCase, OrderStatsUseCase};

// ── GET /admin_stats ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminStatsResponse {
    pub users: u64,
    pub menu_items: u64,
    pub cart_items: u64,
    pub revenue: f64,
}

pub async fn admin_stats(
    State(state): State<AppState>,
) -> Result<Json<AdminStatsResponse>, ApiServiceError> {
    let stats = AdminStatsUseCase {
        stats: state.stats_repo(),
    }
    .execute()
    .await?;
    Ok(Json(AdminStatsResponse {
        users: stats.users,
        menu_items: stats.menu_items,
        cart_items: stats.cart_items,
        revenue: stats.revenue,
    }))
}

// ── GET /order_stats ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CategorySalesResponse {
    pub category: String,
    pub quantity: u64,
    pub revenue: f64,
}

pub async fn order_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySalesResponse>>, ApiServiceError> {
    let sales = OrderStatsUseCase {
        payments: state.payment_repo(),
        menu: state.menu_repo(),
    }
    .execute()
    .await?;
    Ok(Json(
        sales
            .into_iter()
            .map(|s| CategorySalesResponse {
                category: s.category,
                quantity: s.quantity,
                revenue: s.revenue,
            })
            .collect(),
    ))
}
