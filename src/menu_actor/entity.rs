//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! Menu items are listed per restaurant: the filter is the owning [`RestaurantId`].
//! The id is compared as-is; whether that restaurant exists is never checked.

use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, RestaurantId};

impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Filter = RestaurantId;

    fn from_create(id: MenuItemId, params: MenuItemCreate) -> Self {
        Self::new(id, params)
    }

    fn matches(&self, restaurant_id: &RestaurantId) -> bool {
        self.restaurant_id == *restaurant_id
    }
}
