use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use bistro_api::domain::repository::{
    CartRepository, MenuRepository, PaymentRepository, StatsRepository, UserRepository,
};
use bistro_api::domain::types::{
    CartItem, MenuItem, MenuItemChanges, Payment, StoreCounts, User,
};
use bistro_api::error::ApiServiceError;
use bistro_domain::user::UserRole;

// ── InMemoryUserRepo ─────────────────────────────────────────────────────────

pub struct InMemoryUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the stored users for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for InMemoryUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, ApiServiceError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn grant_admin(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.role = UserRole::Admin;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── InMemoryMenuRepo ─────────────────────────────────────────────────────────

pub struct InMemoryMenuRepo {
    pub items: Arc<Mutex<Vec<MenuItem>>>,
}

impl InMemoryMenuRepo {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }
}

impl MenuRepository for InMemoryMenuRepo {
    async fn list(&self) -> Result<Vec<MenuItem>, ApiServiceError> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, ApiServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<MenuItem>, ApiServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn create(&self, item: &MenuItem) -> Result<(), ApiServiceError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &MenuItemChanges) -> Result<bool, ApiServiceError> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.name = changes.name.clone();
                item.recipe = changes.recipe.clone();
                item.price = changes.price;
                item.category = changes.category.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }
}

// ── InMemoryCartRepo ─────────────────────────────────────────────────────────

pub struct InMemoryCartRepo {
    pub items: Arc<Mutex<Vec<CartItem>>>,
    pub fail_delete_many: bool,
    /// Every id set handed to `delete_many`, in call order.
    pub delete_calls: Arc<Mutex<Vec<Vec<Uuid>>>>,
}

impl InMemoryCartRepo {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            fail_delete_many: false,
            delete_calls: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn failing(items: Vec<CartItem>) -> Self {
        Self {
            fail_delete_many: true,
            ..Self::new(items)
        }
    }

    pub fn items_handle(&self) -> Arc<Mutex<Vec<CartItem>>> {
        Arc::clone(&self.items)
    }

    pub fn delete_calls_handle(&self) -> Arc<Mutex<Vec<Vec<Uuid>>>> {
        Arc::clone(&self.delete_calls)
    }
}

impl CartRepository for InMemoryCartRepo {
    async fn list_by_email(&self, email: &str) -> Result<Vec<CartItem>, ApiServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.email == email)
            .cloned()
            .collect())
    }

    async fn create(&self, item: &CartItem) -> Result<(), ApiServiceError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update_price_quantity(
        &self,
        id: Uuid,
        price: f64,
        quantity: i32,
    ) -> Result<bool, ApiServiceError> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.price = price;
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, ApiServiceError> {
        self.delete_calls.lock().unwrap().push(ids.to_vec());
        if self.fail_delete_many {
            return Err(ApiServiceError::Internal(anyhow::anyhow!(
                "cart store unreachable"
            )));
        }
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| !ids.contains(&i.id));
        Ok((before - items.len()) as u64)
    }
}

// ── InMemoryPaymentRepo ──────────────────────────────────────────────────────

pub struct InMemoryPaymentRepo {
    pub payments: Arc<Mutex<Vec<Payment>>>,
    pub fail_insert: bool,
}

impl InMemoryPaymentRepo {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self {
            payments: Arc::new(Mutex::new(payments)),
            fail_insert: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            fail_insert: true,
            ..Self::empty()
        }
    }

    pub fn payments_handle(&self) -> Arc<Mutex<Vec<Payment>>> {
        Arc::clone(&self.payments)
    }
}

impl PaymentRepository for InMemoryPaymentRepo {
    async fn create(&self, payment: &Payment) -> Result<(), ApiServiceError> {
        if self.fail_insert {
            return Err(ApiServiceError::Internal(anyhow::anyhow!(
                "payment store unreachable"
            )));
        }
        self.payments.lock().unwrap().push(payment.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Payment>, ApiServiceError> {
        Ok(self.payments.lock().unwrap().clone())
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Payment>, ApiServiceError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.email == email)
            .cloned()
            .collect())
    }
}

// ── FixedStatsRepo ───────────────────────────────────────────────────────────

pub struct FixedStatsRepo {
    pub counts: StoreCounts,
    pub revenue: f64,
}

impl StatsRepository for FixedStatsRepo {
    async fn counts(&self) -> Result<StoreCounts, ApiServiceError> {
        Ok(self.counts)
    }

    async fn total_revenue(&self) -> Result<f64, ApiServiceError> {
        Ok(self.revenue)
    }
}

// ── Test fixtures ────────────────────────────────────────────────────────────

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

pub fn test_user(email: &str, role: UserRole) -> User {
    User {
        id: Uuid::now_v7(),
        name: email.split('@').next().unwrap_or("user").to_owned(),
        email: email.to_owned(),
        role,
        created_at: Utc::now(),
    }
}

pub fn test_menu_item(category: &str, price: f64) -> MenuItem {
    MenuItem {
        id: Uuid::now_v7(),
        name: format!("{category} special"),
        recipe: "house recipe".to_owned(),
        price,
        category: category.to_owned(),
        created_at: Utc::now(),
    }
}

pub fn test_cart_item(email: &str) -> CartItem {
    CartItem {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        menu_item_id: Uuid::now_v7(),
        name: "espresso".to_owned(),
        price: 3.5,
        quantity: 1,
        created_at: Utc::now(),
    }
}
