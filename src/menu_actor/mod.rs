//! # Menu Actor
//!
//! Owns the menu-item collection and the menu-item id counter. Items are listed per
//! restaurant through [`MenuClient::list_for_restaurant`].

pub mod entity;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates a new MenuItem actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
