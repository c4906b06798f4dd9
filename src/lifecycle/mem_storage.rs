use crate::clients::{MenuClient, OrderClient, RestaurantClient};
use crate::framework::ActorClient;
use crate::lifecycle::{seed_catalogue, StoreConfig};
use crate::model::{
    MenuItem, MenuItemCreate, MenuItemId, Order, OrderCreate, OrderId, Restaurant,
    RestaurantCreate, RestaurantId,
};
use crate::storage::{Storage, StoreError};
use async_trait::async_trait;
use rand::Rng;
use tracing::{error, info};

/// The in-memory store: three actors, one per record kind.
///
/// `MemStorage` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the restaurant, menu and order actors
/// - **Seeding**: Loading the demo catalogue before any request can be served
/// - **The Storage contract**: Routing each [`Storage`] operation to the owning actor
///
/// # Architecture
///
/// Each actor owns its collection and its id counter and serves requests one at a time,
/// so id allocation and insertion form a single critical section per record kind. The
/// three kinds never share a counter.
///
/// # Example
///
/// ```ignore
/// let store = MemStorage::start(StoreConfig::default());
///
/// let restaurants = store.list_restaurants().await?;
/// let menu = store.list_menu_items(restaurants[0].id).await?;
///
/// // Gracefully shut down when done
/// store.shutdown().await?;
/// ```
pub struct MemStorage {
    /// Client for interacting with the Restaurant actor
    pub restaurant_client: RestaurantClient,

    /// Client for interacting with the MenuItem actor
    pub menu_client: MenuClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MemStorage {
    /// Starts a seeded store with the default configuration.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        Self::start(StoreConfig::default())
    }

    /// Starts the store, seeding it with the thread RNG when `config.seed` is set.
    pub fn start(config: StoreConfig) -> Self {
        Self::start_with_rng(config, &mut rand::rng())
    }

    /// Starts the store, drawing seeded ratings, prices and images from `rng`.
    ///
    /// This method:
    /// 1. Creates one actor per record kind
    /// 2. Seeds the catalogue directly into the restaurant and menu actors
    /// 3. Spawns each actor in its own Tokio task
    ///
    /// Seeding finishes before any actor loop runs, so no caller can observe a partial
    /// catalogue.
    pub fn start_with_rng<R: Rng + ?Sized>(config: StoreConfig, rng: &mut R) -> Self {
        // mpsc::channel panics on a zero capacity
        let buffer_size = config.buffer_size.max(1);

        // 1. Create actors (no dependencies between them)
        let (mut restaurant_actor, restaurant_client) =
            crate::restaurant_actor::new(buffer_size);
        let (mut menu_actor, menu_client) = crate::menu_actor::new(buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(buffer_size);

        // 2. Seed before the loops start
        if config.seed {
            seed_catalogue(&mut restaurant_actor, &mut menu_actor, rng);
        }

        // 3. Start actors
        let restaurant_handle = tokio::spawn(restaurant_actor.run());
        let menu_handle = tokio::spawn(menu_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        info!(buffer_size, seeded = config.seed, "Store started");

        Self {
            restaurant_client,
            menu_client,
            order_client,
            handles: vec![restaurant_handle, menu_handle, order_handle],
        }
    }

    /// Gracefully shuts down the store.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains what is queued
    /// and exits. Clones of the clients held elsewhere keep their actor alive, so drop
    /// them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(StoreError::TaskFailed)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), StoreError> {
        info!("Shutting down store...");

        drop(self.restaurant_client);
        drop(self.menu_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(StoreError::TaskFailed(e));
            }
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        self.restaurant_client.list_all().await
    }

    async fn get_restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>, StoreError> {
        self.restaurant_client.get(id).await
    }

    async fn create_restaurant(&self, params: RestaurantCreate) -> Result<Restaurant, StoreError> {
        self.restaurant_client.create_restaurant(params).await
    }

    async fn list_menu_items(&self, restaurant_id: RestaurantId) -> Result<Vec<MenuItem>, StoreError> {
        self.menu_client.list_for_restaurant(restaurant_id).await
    }

    async fn get_menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        self.menu_client.get(id).await
    }

    async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, StoreError> {
        self.menu_client.create_menu_item(params).await
    }

    async fn create_order(&self, params: OrderCreate) -> Result<Order, StoreError> {
        self.order_client.create_order(params).await
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        self.order_client.get(id).await
    }
}
