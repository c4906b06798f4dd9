//! # Restaurant Client
//!
//! Provides a high‑level API for interacting with the `Restaurant` actor.
//! It wraps a `ResourceClient<Restaurant>` and exposes domain‑specific methods.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Restaurant, RestaurantCreate};
use crate::storage::StoreError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::unavailable("Restaurant", e)
    }
}

impl RestaurantClient {
    #[instrument(skip(self))]
    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<Restaurant, StoreError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every restaurant, in creation order.
    pub async fn list_all(&self) -> Result<Vec<Restaurant>, StoreError> {
        self.list(()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Category, RestaurantId};

    fn restaurant(id: u32) -> Restaurant {
        Restaurant::new(
            RestaurantId(id),
            RestaurantCreate {
                name: "Pizza Place".to_string(),
                category: Category::Pizza,
                image: "img".to_string(),
                rating: 4.2,
            },
        )
    }

    #[tokio::test]
    async fn test_get_passes_absent_through() {
        let mut mock = MockClient::<Restaurant>::new();
        mock.expect_get(RestaurantId(3)).return_ok(Some(restaurant(3)));
        mock.expect_get(RestaurantId(99)).return_ok(None);

        let client = RestaurantClient::new(mock.client());

        let found = client.get(RestaurantId(3)).await.unwrap();
        assert_eq!(found.map(|r| r.id), Some(RestaurantId(3)));
        assert!(client.get(RestaurantId(99)).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_all_maps_framework_errors() {
        let mut mock = MockClient::<Restaurant>::new();
        mock.expect_list().return_err(FrameworkError::ActorDropped);

        let client = RestaurantClient::new(mock.client());
        let result = client.list_all().await;

        match result {
            Err(StoreError::Unavailable { entity, source }) => {
                assert_eq!(entity, "Restaurant");
                assert_eq!(source, FrameworkError::ActorDropped);
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
        mock.verify();
    }
}
