//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The store is append-only, so the request set is the read/create subset of CRUD:
///
/// - **Create**: allocates the next id and stores a record built from [`ActorEntity::Create`].
///   Replies with a copy of the stored record.
/// - **Get**: fetches one record by id, `None` if it was never created.
/// - **List**: every record selected by an [`ActorEntity::Filter`], in id order.
///
/// The enum is generic over `T: ActorEntity`, so a payload for one record kind can never
/// reach an actor of another kind.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
}
