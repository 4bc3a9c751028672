use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::CartRepository;
use crate::domain::types::CartItem;
use crate::error::ApiServiceError;

// ── ListCart ─────────────────────────────────────────────────────────────────

pub struct ListCartUseCase<R: CartRepository> {
    pub repo: R,
}

impl<R: CartRepository> ListCartUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Vec<CartItem>, ApiServiceError> {
        self.repo.list_by_email(email).await
    }
}

// ── AddCartItem ──────────────────────────────────────────────────────────────

pub struct AddCartItemInput {
    pub email: String,
    pub menu_item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

pub struct AddCartItemUseCase<R: CartRepository> {
    pub repo: R,
}

impl<R: CartRepository> AddCartItemUseCase<R> {
    /// Add an entry with its own price/name copies. The same menu item can
    /// appear in the cart more than once; entries are independent rows.
    pub async fn execute(&self, input: AddCartItemInput) -> Result<Uuid, ApiServiceError> {
        let item = CartItem {
            id: Uuid::now_v7(),
            email: input.email,
            menu_item_id: input.menu_item_id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
            created_at: Utc::now(),
        };
        self.repo.create(&item).await?;
        Ok(item.id)
    }
}

// ── UpdateCartItem ───────────────────────────────────────────────────────────

pub struct UpdateCartItemUseCase<R: CartRepository> {
    pub repo: R,
}

impl<R: CartRepository> UpdateCartItemUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        price: f64,
        quantity: i32,
    ) -> Result<(), ApiServiceError> {
        if !self.repo.update_price_quantity(id, price, quantity).await? {
            return Err(ApiServiceError::CartItemNotFound);
        }
        Ok(())
    }
}

// ── RemoveCartItem ───────────────────────────────────────────────────────────

pub struct RemoveCartItemUseCase<R: CartRepository> {
    pub repo: R,
}

impl<R: CartRepository> RemoveCartItemUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ApiServiceError::CartItemNotFound);
        }
        Ok(())
    }
}
