//! Error types for the Country actor.

use thiserror::Error;

/// Errors that can occur during country operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CountryError {
    /// The append payload is not usable as a record.
    #[error("{0}")]
    InvalidPayload(String),

    /// Every id up to the maximum representable value is taken.
    #[error("No identifiers left: {0}")]
    IdSpaceExhausted(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
