//! # Menu Client
//!
//! Provides a high‑level API for interacting with the `MenuItem` actor.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{MenuItem, MenuItemCreate, RestaurantId};
use crate::storage::StoreError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the MenuItem actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::unavailable("MenuItem", e)
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, StoreError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Menu items whose `restaurant_id` equals `restaurant_id`, in creation order.
    ///
    /// An unknown restaurant simply yields an empty list.
    pub async fn list_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuItem>, StoreError> {
        self.list(restaurant_id).await
    }
}
