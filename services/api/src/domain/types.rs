use chrono::{DateTime, Utc};
use uuid::Uuid;

use bistro_domain::user::UserRole;

/// Registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Catalog entry.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub recipe: String,
    pub price: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Full replacement set for a catalog update.
#[derive(Debug, Clone)]
pub struct MenuItemChanges {
    pub name: String,
    pub recipe: String,
    pub price: f64,
    pub category: String,
}

/// Cart entry owned by one user. `name`/`price` are copies taken when the
/// item was added, not live references into the catalog.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: Uuid,
    pub email: String,
    pub menu_item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Customer review. Append-only.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

/// Settled payment. Immutable once written.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: Uuid,
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub menu_item_ids: Vec<Uuid>,
    pub cart_item_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Row counts for the administrative dashboard. Approximate cardinalities
/// are acceptable; these are not financial figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: u64,
    pub menu_items: u64,
    pub cart_items: u64,
}

/// One row of the per-category order breakdown.
///
/// `quantity` counts purchase occurrences (per unit, not per distinct
/// order); `revenue` sums the *current* catalog price per occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySales {
    pub category: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Outcome of the best-effort cart purge after a payment insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCleanup {
    /// Batch delete ran; `removed` may be lower than the requested id count
    /// when some cart entries were already gone.
    Completed { removed: u64 },
    /// The delete errored. The payment stands regardless.
    Failed { message: String },
}

/// Composite settlement result: the durable payment plus the cleanup
/// outcome, so callers can detect partial application.
#[derive(Debug, Clone)]
pub struct SettlementOutcome {
    pub payment_id: Uuid,
    pub cart_cleanup: CartCleanup,
}
