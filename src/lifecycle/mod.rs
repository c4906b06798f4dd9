//! # Store Lifecycle & Orchestration
//!
//! This module starts, seeds and stops the actors that make up the in-memory store.
//!
//! ## The Orchestration Pattern
//!
//! Individual actors are simple; wiring them together is where the lifecycle rules live:
//!
//! 1. **Actor Creation** - Instantiate the restaurant, menu and order actors and their clients
//! 2. **Seeding** - Insert the demo catalogue while the actors are still owned by this module
//! 3. **Startup** - Spawn each actor loop in its own task
//! 4. **Graceful Shutdown** - Drop the clients and await every task
//!
//! Seeding happens between steps 1 and 3, so a [`MemStorage`] is fully populated before the
//! caller receives it.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` after queued requests drain
//! 3. **Await completion** - A panicked task is reported as `StoreError::TaskFailed`
//!
//! The actors hold no references to each other, so shutdown order does not matter.
//!
//! ## Configuration
//!
//! [`StoreConfig`] carries the channel capacity and the seeding switch, from code or from
//! `STORE_BUFFER_SIZE` / `STORE_SEED`. Log verbosity is controlled by `RUST_LOG`, see
//! [`tracing`](self::tracing).

pub mod config;
pub mod mem_storage;
pub mod seed;
pub mod tracing;

pub use self::config::StoreConfig;
pub use self::mem_storage::MemStorage;
pub use self::seed::{seed_catalogue, MENU_ITEMS_PER_RESTAURANT};
pub use self::tracing::setup_tracing;
