//! # Storage Abstraction
//!
//! [`Storage`] is the interface the API layer programs against. It exposes exactly the
//! read and create operations of the store: there is no update or delete for any record
//! kind.
//!
//! [`MemStorage`](crate::lifecycle::MemStorage) is the only implementation. A persistent
//! backend would implement the same trait, and call sites holding an `Arc<dyn Storage>`
//! would not change.
//!
//! ## Contract
//!
//! - Field sets arrive already validated; implementations do not re-check them.
//! - `get_*` returns `Ok(None)` for an id that was never allocated.
//! - `create_*` allocates the next id of that kind (per-kind counters, starting at 1,
//!   never reused) and returns the stored record.
//! - `list_menu_items` filters by `restaurant_id` only, in creation order, and returns an
//!   empty list for unknown restaurants.
//! - No referential checks: menu items may name missing restaurants, orders may name
//!   missing menu items.

pub mod error;

pub use error::StoreError;

use crate::model::{
    MenuItem, MenuItemCreate, MenuItemId, Order, OrderCreate, OrderId, Restaurant,
    RestaurantCreate, RestaurantId,
};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    // Restaurants
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError>;
    async fn get_restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>, StoreError>;
    async fn create_restaurant(&self, params: RestaurantCreate) -> Result<Restaurant, StoreError>;

    // Menu items
    async fn list_menu_items(&self, restaurant_id: RestaurantId) -> Result<Vec<MenuItem>, StoreError>;
    async fn get_menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError>;
    async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, StoreError>;

    // Orders
    async fn create_order(&self, params: OrderCreate) -> Result<Order, StoreError>;
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, StoreError>;
}
