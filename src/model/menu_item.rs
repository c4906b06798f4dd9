/// A dish offered by a restaurant.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// `restaurant_id` is fixed at creation. The store never checks that it names an existing
/// restaurant, so orphaned items are allowed.
use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for MenuItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// Payload for creating a new menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl MenuItem {
    /// Combines an allocated id with the creation payload.
    pub fn new(id: MenuItemId, params: MenuItemCreate) -> Self {
        Self {
            id,
            restaurant_id: params.restaurant_id,
            name: params.name,
            description: params.description,
            price: params.price,
            image: params.image,
        }
    }
}
