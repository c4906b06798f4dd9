//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod menu_client;
pub mod order_client;
pub mod restaurant_client;

pub use menu_client::*;
pub use order_client::*;
pub use restaurant_client::*;
