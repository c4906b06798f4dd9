//! Generic actor framework for record collections.
//!
//! This module provides the building blocks the store is made of: one actor per record
//! kind, each owning its collection and id counter.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a collection and allocates ids
//! - [`ResourceClient`] - Typed handle that sends requests to an actor
//! - [`ActorClient`] - Default `get`/`list` for record-specific client wrappers
//! - [`FrameworkError`] - Transport errors between client and actor
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
