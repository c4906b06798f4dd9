/// A restaurant listed in the catalogue.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Restaurant`](#impl-ActorEntity-for-Restaurant) for details on
/// creation parameters ([`RestaurantCreate`]).
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub category: Category,
    pub image: String,
    pub rating: f64,
}

/// Payload for creating a new restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub category: Category,
    pub image: String,
    pub rating: f64,
}

impl Restaurant {
    /// Combines an allocated id with the creation payload.
    pub fn new(id: RestaurantId, params: RestaurantCreate) -> Self {
        Self {
            id,
            name: params.name,
            category: params.category,
            image: params.image,
            rating: params.rating,
        }
    }
}
