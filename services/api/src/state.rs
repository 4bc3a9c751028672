use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCartRepository, DbMenuRepository, DbPaymentRepository, DbReviewRepository,
    DbStatsRepository, DbUserRepository,
};
use crate::infra::stripe::StripePaymentIntents;

/// Shared application state passed to every handler via axum `State`.
///
/// The `DatabaseConnection` is created once at startup and cloned here;
/// sea-orm clones share one underlying pool, so every concurrent handler
/// reuses the same connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub payment_intents: StripePaymentIntents,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn menu_repo(&self) -> DbMenuRepository {
        DbMenuRepository {
            db: self.db.clone(),
        }
    }

    pub fn cart_repo(&self) -> DbCartRepository {
        DbCartRepository {
            db: self.db.clone(),
        }
    }

    pub fn review_repo(&self) -> DbReviewRepository {
        DbReviewRepository {
            db: self.db.clone(),
        }
    }

    pub fn payment_repo(&self) -> DbPaymentRepository {
        DbPaymentRepository {
            db: self.db.clone(),
        }
    }

    pub fn stats_repo(&self) -> DbStatsRepository {
        DbStatsRepository {
            db: self.db.clone(),
        }
    }
}
