//! ActorEntity trait implementation for the Restaurant domain type.
//!
//! Restaurants are only ever listed in full, so the filter is `()`.

use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId};

impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Filter = ();

    fn from_create(id: RestaurantId, params: RestaurantCreate) -> Self {
        Self::new(id, params)
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
