//! Error types for store operations.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors a store operation can report.
///
/// Missing records are not errors: `get_*` operations return `Ok(None)`. The variants
/// below only occur once the store is shutting down or one of its actor tasks has died.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The actor owning `entity` records could not be reached.
    #[error("{entity} actor unavailable: {source}")]
    Unavailable {
        entity: &'static str,
        #[source]
        source: FrameworkError,
    },

    /// An actor task panicked or was cancelled during shutdown.
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub fn unavailable(entity: &'static str, source: FrameworkError) -> Self {
        StoreError::Unavailable { entity, source }
    }
}
