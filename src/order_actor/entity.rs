//! ActorEntity trait implementation for the Order domain type.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    // Orders are fetched by id only.
    type Filter = ();

    fn from_create(id: OrderId, params: OrderCreate) -> Self {
        Self::new(id, params)
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
