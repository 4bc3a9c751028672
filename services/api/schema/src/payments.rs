use sea_orm::entity::prelude::*;

/// Settled payment. Immutable once written — its existence is the source
/// of truth that a purchase happened.
///
/// `menu_item_ids` and `cart_item_ids` keep the payment a single
/// self-contained record: the former feeds the per-category order stats,
/// the latter records which cart entries funded the purchase.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub menu_item_ids: Vec<Uuid>,
    pub cart_item_ids: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
