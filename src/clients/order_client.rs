//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate};
use crate::storage::StoreError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Orders are stored exactly as submitted; item identifiers are not checked against the
/// menu.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, StoreError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::unavailable("Order", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{OrderId, PaymentMethod};

    fn order_params() -> OrderCreate {
        OrderCreate {
            items: vec!["25".to_string(), "not-a-menu-item".to_string()],
            total: 8.0,
            status: "pending".to_string(),
            payment_method: PaymentMethod::Upi,
            address: "123 St".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_order_returns_stored_record() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_ok(Order::new(OrderId(1), order_params()));
        mock.expect_get(OrderId(1))
            .return_ok(Some(Order::new(OrderId(1), order_params())));

        let client = OrderClient::new(mock.client());

        let order = client.create_order(order_params()).await.unwrap();
        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.items.len(), 2);

        let fetched = client.get(OrderId(1)).await.unwrap();
        assert_eq!(fetched, Some(order));

        mock.verify();
    }
}
