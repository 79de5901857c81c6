//! Runtime orchestration and lifecycle management.
//!
//! - [`CountrySystem`] - Starts the Country actor with its seed and shuts it down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the HTTP server** - drops the router, and with it the client clones in its state
//! 2. **Drop the system's client** - closes the sender side of the channel
//! 3. **Actor drains** - requests already queued are still answered, then `recv()` returns `None`
//! 4. **Await completion** - the actor task is joined and its final size logged

pub mod country_system;
pub mod tracing;

pub use country_system::*;
pub use tracing::*;
