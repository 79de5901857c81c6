use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to the actor to request operations.
///
/// A collection resource has exactly two entry points:
///
/// - **List**: read the whole collection, in insertion order.
/// - **Create**: derive the next id, build the record from [`ActorEntity::Create`]
///   and append it. The stored record is sent back, not just its id, because
///   callers return it verbatim.
///
/// Both are handled one at a time by the owning task, so each message is its
/// own critical section.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
}
