//! Generic actor engine for ordered record collections.
//!
//! This module provides the building blocks for serving a collection of records
//! from a single owning task, with list and append operations and server-side
//! id assignment.
//!
//! # Main Components
//!
//! - [`ActorEntity`] / [`ResourceId`] - Traits that record types and their ids implement
//! - [`ResourceActor`] - Generic actor that owns the collection and assigns ids
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`ActorClient`] - Trait domain clients implement to inherit `list`
//! - [`FrameworkError`] - Engine-level errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, ResourceId};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
