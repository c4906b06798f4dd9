//! Order-specific resource logic and entity implementation.
//!
//! The order actor stores what it is given. Item identifiers are not resolved against the
//! menu actor, so it has no dependencies on the other actors.

pub mod entity;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
