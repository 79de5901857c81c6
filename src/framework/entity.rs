//! # Entity Contract
//!
//! The traits a record type implements so a [`ResourceActor`](crate::framework::ResourceActor)
//! can keep it in an ordered collection and hand out identifiers for it.

use std::fmt::{Debug, Display};

/// Identifier type for records held by a `ResourceActor`.
///
/// Ids are not tracked by a separate counter. The actor derives the next one
/// from the records it currently holds: the successor of the largest id, or
/// [`ResourceId::first`] when the collection is empty.
pub trait ResourceId: Ord + Clone + Send + Sync + Display + Debug + 'static {
    /// The id handed to the first record of an empty collection.
    fn first() -> Self;

    /// The id following `self`, or `None` once the id space is used up.
    fn successor(&self) -> Option<Self>;
}

impl ResourceId for u32 {
    fn first() -> Self {
        1
    }

    fn successor(&self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl ResourceId for u64 {
    fn first() -> Self {
        1
    }

    fn successor(&self) -> Option<Self> {
        self.checked_add(1)
    }
}

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Architecture Note
/// By defining one contract that every record type satisfies, the actor loop
/// (ordering, id assignment, logging) is written *once* and reused for any
/// collection the service exposes.
///
/// The associated `Create` type is the payload accepted by an append. The
/// actor never looks inside it; it only pairs it with a freshly derived id via
/// [`ActorEntity::from_create_params`].
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: ResourceId;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id currently stored on this record.
    fn id(&self) -> Self::Id;

    /// Construct the full record from the assigned id and the payload.
    ///
    /// Any id carried inside `params` must be replaced by `id`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ids_start_at_one() {
        assert_eq!(<u32 as ResourceId>::first(), 1);
        assert_eq!(<u64 as ResourceId>::first(), 1);
    }

    #[test]
    fn test_successor_stops_at_max() {
        assert_eq!(7u32.successor(), Some(8));
        assert_eq!(u32::MAX.successor(), None);
        assert_eq!(u64::MAX.successor(), None);
    }
}
