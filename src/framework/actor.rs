//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one record collection
//! and its id counter. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the collection.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`, `next_id`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so allocating an id and
/// inserting the record happen as one step that no other request can interleave with.
/// No `Mutex` or `RwLock` is needed: the task owns the state exclusively.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Seed** (optional): Call `seed()` to insert initial records before anyone can send requests.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Implementation Details
///
/// * **Create**: takes `next_id`, increments it, builds the record with
///   `T::from_create`, inserts it and replies with a clone.
/// * **Get**: replies with a clone of the record or `None`.
/// * **List**: replies with clones of every record where `T::matches(filter)` holds.
///
/// Records live in a `BTreeMap`. Ids are allocated in increasing order, so id order is
/// insertion order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Inserts a record directly, before the actor loop is running.
    ///
    /// Ids come from the same counter as `Create` requests, so a seeded record is
    /// indistinguishable from one created over the channel.
    pub fn seed(&mut self, params: T::Create) -> T {
        let (_, item) = self.insert(params);
        item
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn insert(&mut self, params: T::Create) -> (T::Id, T) {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        let item = T::from_create(id.clone(), params);
        self.store.insert(id.clone(), item.clone());
        (id, item)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Restaurant" instead of "restaurant_store::model::restaurant::Restaurant")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let (id, item) = self.insert(params);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::FrameworkError;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        shelf: u32,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        shelf: u32,
        text: String,
    }

    #[derive(Debug)]
    struct OnShelf(Option<u32>);

    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Filter = OnShelf;

        fn from_create(id: u32, params: NoteCreate) -> Self {
            Self {
                id,
                shelf: params.shelf,
                text: params.text,
            }
        }

        fn matches(&self, filter: &OnShelf) -> bool {
            filter.0.is_none_or(|shelf| shelf == self.shelf)
        }
    }

    fn note(shelf: u32, text: &str) -> NoteCreate {
        NoteCreate {
            shelf,
            text: text.to_string(),
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let first = client.create(note(1, "a")).await.unwrap();
        let second = client.create(note(1, "b")).await.unwrap();
        let third = client.create(note(2, "c")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_get_returns_stored_record_or_none() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let created = client.create(note(1, "hello")).await.unwrap();

        let fetched = client.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        assert_eq!(client.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_filters_in_insertion_order() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run());

        for (shelf, text) in [(1, "a"), (2, "b"), (1, "c"), (3, "d"), (1, "e")] {
            client.create(note(shelf, text)).await.unwrap();
        }

        let on_one: Vec<String> = client
            .list(OnShelf(Some(1)))
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert_eq!(on_one, vec!["a", "c", "e"]);

        assert!(client.list(OnShelf(Some(9))).await.unwrap().is_empty());
        assert_eq!(client.list(OnShelf(None)).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_seeded_records_share_the_counter() {
        let (mut actor, client) = ResourceActor::<Note>::new(10);
        assert!(actor.is_empty());
        let seeded = actor.seed(note(1, "seed"));
        assert_eq!(seeded.id, 1);
        assert_eq!(actor.len(), 1);
        tokio::spawn(actor.run());

        let created = client.create(note(1, "after")).await.unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(client.get(1).await.unwrap(), Some(seeded));
    }

    #[tokio::test]
    async fn test_concurrent_creates_never_share_an_id() {
        let (actor, client) = ResourceActor::<Note>::new(4);
        tokio::spawn(actor.run());

        let mut handles = vec![];
        for i in 0..50 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client.create(note(i % 3, "x")).await.unwrap().id
            }));
        }

        let mut ids = vec![];
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        drop(actor);

        let result = client.get(1).await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }
}
