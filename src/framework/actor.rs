//! # Collection Actor
//!
//! This module defines the `ResourceActor`, the task that owns an ordered
//! collection of records. It implements the "Server" side of the Actor Model:
//! messages are processed sequentially and the collection is never shared.

use crate::framework::client::ResourceClient;
use crate::framework::entity::{ActorEntity, ResourceId};
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an ordered collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// HTTP handlers run concurrently, but every request for this collection is a
/// message on one channel, and the loop in [`ResourceActor::run`] handles them
/// one after another. Deriving the next id and appending the record happen in
/// the same message, so two concurrent appends can never observe the same
/// maximum. No `Mutex` guards `store`; the task owns it.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_seed()`) to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever the collection is needed.
///
/// # Operations
///
/// * **List**: Returns a clone of every record, in insertion order.
///
/// * **Create**:
///     1. Derives the next id from the current records (see [`ResourceActor::next_id`]).
///     2. Calls `T::from_create_params` with that id.
///     3. Pushes the record onto the end of `store`.
///     4. Returns the stored record.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with an empty collection and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_seed(buffer_size, Vec::new())
    }

    /// Creates a `ResourceActor` whose collection starts with `seed`, in the given order.
    ///
    /// Seed records keep the ids they carry. Later appends continue after the
    /// largest of them.
    pub fn with_seed(buffer_size: usize, seed: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: seed,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// The id the next appended record receives.
    ///
    /// Re-derived from the records on every call: the successor of the largest
    /// id present, or [`ResourceId::first`] when the collection is empty.
    pub fn next_id(&self) -> Result<T::Id, FrameworkError> {
        match self.store.iter().map(T::id).max() {
            None => Ok(T::Id::first()),
            Some(max) => max
                .successor()
                .ok_or_else(|| FrameworkError::IdSpaceExhausted(max.to_string())),
        }
    }

    fn append(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        let id = self.next_id()?;
        let item = T::from_create_params(id, params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.push(item.clone());
        Ok(item)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Country" instead of "countries_api::model::country::Country")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.append(params);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
