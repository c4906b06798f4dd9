//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`; without it the store logs at `info`. The output uses the
//! compact format and hides the module prefix (`with_target(false)`), since actor events
//! already carry an `entity_type` field.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` (with the seeded size) and `Shutdown`
//! - **Creates**: `Created` at info with `entity_type`, `id` and the new collection size
//! - **Reads**: `Get` / `List` at debug with the id or filter and the result size
//! - **Client calls**: one span per client method, named after the method
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per created record
//! RUST_LOG=debug cargo run    # full payloads and every read
//! ```
//!
//! With `RUST_LOG=info` the demo binary prints lines like:
//!
//! ```text
//! INFO Actor started entity_type="Restaurant" size=6
//! INFO Created entity_type="Restaurant" id=restaurant_7 size=7
//! INFO create_order: Sending create_order to actor
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
