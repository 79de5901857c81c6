//! # Country Actor
//!
//! The collection resource served under `/countries`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Country`]
//! - [`error`] - [`CountryError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use countries_api::country_actor;
//! use countries_api::model::{seed_countries, CountryCreate};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = country_actor::new(32, seed_countries());
//!     tokio::spawn(actor.run());
//!
//!     let payload = CountryCreate::try_from(json!({"name": "Peru"}))?;
//!     let peru = client.add_country(payload).await?;
//!     assert_eq!(peru.id().0, 4);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CountryClient;
use crate::framework::ResourceActor;
use crate::model::Country;

/// Creates a new Country actor, pre-filled with `seed`, and its client.
pub fn new(buffer_size: usize, seed: Vec<Country>) -> (ResourceActor<Country>, CountryClient) {
    let (actor, generic_client) = ResourceActor::with_seed(buffer_size, seed);
    (actor, CountryClient::new(generic_client))
}
