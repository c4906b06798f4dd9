/// A placed order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// `items` are opaque identifiers supplied by the caller. They are stored as given and
/// never resolved against the menu.
use crate::model::PaymentMethod;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<String>,
    pub total: f64,
    pub status: String,
    pub payment_method: PaymentMethod,
    pub address: String,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub items: Vec<String>,
    pub total: f64,
    pub status: String,
    pub payment_method: PaymentMethod,
    pub address: String,
}

impl Order {
    /// Combines an allocated id with the creation payload.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            items: params.items,
            total: params.total,
            status: params.status,
            payment_method: params.payment_method,
            address: params.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_parses_api_json() {
        let params: OrderCreate = serde_json::from_str(
            r#"{"items":["25"],"total":8,"status":"pending","paymentMethod":"cash","address":"123 St"}"#,
        )
        .unwrap();

        assert_eq!(params.items, vec!["25".to_string()]);
        assert_eq!(params.total, 8.0);
        assert_eq!(params.payment_method, PaymentMethod::Cash);

        let order = Order::new(OrderId(1), params);
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["paymentMethod"], "cash");
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_unknown_payment_method_is_rejected() {
        let result = serde_json::from_str::<OrderCreate>(
            r#"{"items":[],"total":0,"status":"pending","paymentMethod":"cheque","address":"x"}"#,
        );
        assert!(result.is_err());
    }
}
