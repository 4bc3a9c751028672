use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, Statement,
    sea_query::Expr,
};
use uuid::Uuid;

use bistro_api_schema::{cart_items, menu_items, payments, reviews, users};
use bistro_domain::user::UserRole;

use crate::domain::repository::{
    CartRepository, MenuRepository, PaymentRepository, ReviewRepository, StatsRepository,
    UserRepository,
};
use crate::domain::types::{
    CartItem, MenuItem, MenuItemChanges, Payment, Review, StoreCounts, User,
};
use crate::error::ApiServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, ApiServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            role: Set(stored_role(user.role)),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }

    async fn grant_admin(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::Role, Expr::value(UserRole::Admin.as_str()))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("grant admin role")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        role: UserRole::from_stored(model.role.as_deref()),
        created_at: model.created_at,
    }
}

fn stored_role(role: UserRole) -> Option<String> {
    // Customers carry no role value at all; only admins get one.
    role.is_admin().then(|| UserRole::Admin.as_str().to_owned())
}

// ── Menu repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMenuRepository {
    pub db: DatabaseConnection,
}

impl MenuRepository for DbMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>, ApiServiceError> {
        let models = menu_items::Entity::find()
            .order_by_asc(menu_items::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list menu items")?;
        Ok(models.into_iter().map(menu_item_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, ApiServiceError> {
        let model = menu_items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find menu item by id")?;
        Ok(model.map(menu_item_from_model))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<MenuItem>, ApiServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = menu_items::Entity::find()
            .filter(menu_items::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("find menu items by ids")?;
        Ok(models.into_iter().map(menu_item_from_model).collect())
    }

    async fn create(&self, item: &MenuItem) -> Result<(), ApiServiceError> {
        menu_items::ActiveModel {
            id: Set(item.id),
            name: Set(item.name.clone()),
            recipe: Set(item.recipe.clone()),
            price: Set(item.price),
            category: Set(item.category.clone()),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("create menu item")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &MenuItemChanges) -> Result<bool, ApiServiceError> {
        let result = menu_items::Entity::update_many()
            .col_expr(menu_items::Column::Name, Expr::value(changes.name.clone()))
            .col_expr(
                menu_items::Column::Recipe,
                Expr::value(changes.recipe.clone()),
            )
            .col_expr(menu_items::Column::Price, Expr::value(changes.price))
            .col_expr(
                menu_items::Column::Category,
                Expr::value(changes.category.clone()),
            )
            .filter(menu_items::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update menu item")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = menu_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete menu item")?;
        Ok(result.rows_affected > 0)
    }
}

fn menu_item_from_model(model: menu_items::Model) -> MenuItem {
    MenuItem {
        id: model.id,
        name: model.name,
        recipe: model.recipe,
        price: model.price,
        category: model.category,
        created_at: model.created_at,
    }
}

// ── Cart repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCartRepository {
    pub db: DatabaseConnection,
}

impl CartRepository for DbCartRepository {
    async fn list_by_email(&self, email: &str) -> Result<Vec<CartItem>, ApiServiceError> {
        let models = cart_items::Entity::find()
            .filter(cart_items::Column::Email.eq(email))
            .order_by_asc(cart_items::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list cart items by email")?;
        Ok(models.into_iter().map(cart_item_from_model).collect())
    }

    async fn create(&self, item: &CartItem) -> Result<(), ApiServiceError> {
        cart_items::ActiveModel {
            id: Set(item.id),
            email: Set(item.email.clone()),
            menu_item_id: Set(item.menu_item_id),
            name: Set(item.name.clone()),
            price: Set(item.price),
            quantity: Set(item.quantity),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("create cart item")?;
        Ok(())
    }

    async fn update_price_quantity(
        &self,
        id: Uuid,
        price: f64,
        quantity: i32,
    ) -> Result<bool, ApiServiceError> {
        let result = cart_items::Entity::update_many()
            .col_expr(cart_items::Column::Price, Expr::value(price))
            .col_expr(cart_items::Column::Quantity, Expr::value(quantity))
            .filter(cart_items::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update cart item price/quantity")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = cart_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete cart item")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, ApiServiceError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = cart_items::Entity::delete_many()
            .filter(cart_items::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await
            .context("batch delete cart items")?;
        Ok(result.rows_affected)
    }
}

fn cart_item_from_model(model: cart_items::Model) -> CartItem {
    CartItem {
        id: model.id,
        email: model.email,
        menu_item_id: model.menu_item_id,
        name: model.name,
        price: model.price,
        quantity: model.quantity,
        created_at: model.created_at,
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn list(&self) -> Result<Vec<Review>, ApiServiceError> {
        let models = reviews::Entity::find()
            .order_by_desc(reviews::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list reviews")?;
        Ok(models
            .into_iter()
            .map(|m| Review {
                id: m.id,
                name: m.name,
                details: m.details,
                rating: m.rating,
                created_at: m.created_at,
            })
            .collect())
    }

    async fn create(&self, review: &Review) -> Result<(), ApiServiceError> {
        reviews::ActiveModel {
            id: Set(review.id),
            name: Set(review.name.clone()),
            details: Set(review.details.clone()),
            rating: Set(review.rating),
            created_at: Set(review.created_at),
        }
        .insert(&self.db)
        .await
        .context("create review")?;
        Ok(())
    }
}

// ── Payment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPaymentRepository {
    pub db: DatabaseConnection,
}

impl PaymentRepository for DbPaymentRepository {
    async fn create(&self, payment: &Payment) -> Result<(), ApiServiceError> {
        payments::ActiveModel {
            id: Set(payment.id),
            email: Set(payment.email.clone()),
            price: Set(payment.price),
            transaction_id: Set(payment.transaction_id.clone()),
            menu_item_ids: Set(payment.menu_item_ids.clone()),
            cart_item_ids: Set(payment.cart_item_ids.clone()),
            created_at: Set(payment.created_at),
        }
        .insert(&self.db)
        .await
        .context("create payment")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Payment>, ApiServiceError> {
        let models = payments::Entity::find()
            .order_by_desc(payments::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list payments")?;
        Ok(models.into_iter().map(payment_from_model).collect())
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Payment>, ApiServiceError> {
        let models = payments::Entity::find()
            .filter(payments::Column::Email.eq(email))
            .order_by_desc(payments::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list payments by email")?;
        Ok(models.into_iter().map(payment_from_model).collect())
    }
}

fn payment_from_model(model: payments::Model) -> Payment {
    Payment {
        id: model.id,
        email: model.email,
        price: model.price,
        transaction_id: model.transaction_id,
        menu_item_ids: model.menu_item_ids,
        cart_item_ids: model.cart_item_ids,
        created_at: model.created_at,
    }
}

// ── Stats repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStatsRepository {
    pub db: DatabaseConnection,
}

impl StatsRepository for DbStatsRepository {
    async fn counts(&self) -> Result<StoreCounts, ApiServiceError> {
        let users = users::Entity::find()
            .count(&self.db)
            .await
            .context("count users")?;
        let menu_items = menu_items::Entity::find()
            .count(&self.db)
            .await
            .context("count menu items")?;
        let cart_items = cart_items::Entity::find()
            .count(&self.db)
            .await
            .context("count cart items")?;
        Ok(StoreCounts {
            users,
            menu_items,
            cart_items,
        })
    }

    async fn total_revenue(&self) -> Result<f64, ApiServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct RevenueRow {
            total: f64,
        }

        // COALESCE keeps the zero-payment case at 0 rather than NULL.
        let row = RevenueRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT COALESCE(SUM(price), 0)::double precision AS total FROM payments",
        ))
        .one(&self.db)
        .await
        .context("sum payment revenue")?;

        Ok(row.map(|r| r.total).unwrap_or(0.0))
    }
}
