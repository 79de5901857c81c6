//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod country_client;

pub use country_client::*;
