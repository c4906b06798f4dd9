//! # Framework Errors
//!
//! Transport-level failures between a `ResourceClient` and its `ResourceActor`.
//! Missing records are not errors; they come back as `None`.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
