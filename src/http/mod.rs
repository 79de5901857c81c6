//! HTTP surface of the service, built on axum.
//!
//! - [`routes`] - The route table ([`router`])
//! - [`handlers`] - One handler per endpoint plus the shared [`AppState`]
//! - [`content_type`] - JSON content negotiation for request bodies
//! - [`error`] - [`ApiError`] and its JSON error body

pub mod content_type;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::router;
