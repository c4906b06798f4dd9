//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every stored record (Restaurant, MenuItem, Order)
//! implements to be managed by the generic `ResourceActor`. It names the id type, the creation
//! payload and the filter used by list requests.
//!
//! # Architecture Note
//! By defining one contract for all record kinds we write the `ResourceActor` logic *once*
//! and reuse it for every collection in the store.
//!
//! Associated types keep the requests type safe: a `Restaurant` actor only accepts a
//! `RestaurantCreate` payload, and sending it a `MenuItemCreate` does not compile.
//!
//! There is no update or delete hook. Records are immutable once created.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by ResourceActor.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so that
    /// iteration follows allocation order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// Selection criteria accepted by list requests.
    /// Use `()` when the collection is only ever listed in full.
    type Filter: Send + Sync + Debug;

    /// Construct the full entity from the allocated ID and the payload.
    fn from_create(id: Self::Id, params: Self::Create) -> Self;

    /// Whether this record is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
