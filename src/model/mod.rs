//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! plus the enumerations shared with the request validator.

pub mod catalog;
pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use catalog::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
