//! # Restaurant Actor
//!
//! Owns the restaurant collection and the restaurant id counter.
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_store::restaurant_actor;
//! use restaurant_store::model::{Category, RestaurantCreate, RestaurantId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = restaurant_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let params = RestaurantCreate {
//!         name: "Taco Hut".to_string(),
//!         category: Category::Mexican,
//!         image: "img1".to_string(),
//!         rating: 4.5,
//!     };
//!     let restaurant = client.create_restaurant(params).await?;
//!     assert_eq!(restaurant.id, RestaurantId(1));
//!     Ok(())
//! }
//! ```

pub mod entity;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::Restaurant;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
