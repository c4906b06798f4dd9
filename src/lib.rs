//! # Restaurant Store
//!
//! > **The data layer of a restaurant browsing and ordering backend.**
//!
//! This crate holds restaurants, their menu items and placed orders in memory, assigns
//! their ids and seeds a demo catalogue at startup. HTTP routing and request validation
//! live outside; they call in through the [`Storage`](storage::Storage) trait.
//!
//! ## 🏗️ Design
//!
//! Each record kind is owned by one actor: a Tokio task holding the collection and its id
//! counter, processing requests one at a time. Allocation and insertion therefore happen
//! as a single step, and reads never see a half-written record, without any locks.
//!
//! - **Append-only**: records are created and read, never updated or deleted.
//! - **Per-kind ids**: restaurants, menu items and orders each count from 1, independently.
//! - **Permissive references**: menu items may name a missing restaurant and orders may
//!   list unknown items. The store keeps what it is given.
//! - **Absent is not an error**: `get_*` returns `Ok(None)` for unknown ids.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) and the
//! [`ActorEntity`](framework::ActorEntity) trait it is written against.
//!
//! ### 2. The Records ([`model`])
//! [`Restaurant`](model::Restaurant), [`MenuItem`](model::MenuItem), [`Order`](model::Order),
//! their creation payloads and the shared [`Category`](model::Category) /
//! [`PaymentMethod`](model::PaymentMethod) vocabularies.
//!
//! ### 3. The Actors ([`restaurant_actor`], [`menu_actor`], [`order_actor`])
//! `ActorEntity` implementations and factories, one module per record kind.
//!
//! ### 4. The Interface ([`clients`], [`storage`])
//! Typed clients per actor, and the [`Storage`](storage::Storage) trait the API layer uses.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`MemStorage`](lifecycle::MemStorage) starts, seeds and shuts down the actors.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Start empty, with a larger request queue
//! STORE_SEED=false STORE_BUFFER_SIZE=256 cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod restaurant_actor;
pub mod storage;
