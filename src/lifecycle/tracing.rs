//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber. Levels come
//! from `RUST_LOG`; with it unset, only errors are printed.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` and `Shutdown`, each with the collection `size`
//! - **Collection operations**: `Created` with the assigned `id`, `List` at debug level
//! - **HTTP requests**: one span per request from `tower_http`'s `TraceLayer`
//! - **Rejected requests**: `warn` for 4xx, `error` for 5xx, with the reason
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Show payloads and per-request spans
//! RUST_LOG=debug,tower_http=debug cargo run
//!
//! # Only the collection engine
//! RUST_LOG=countries_api::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, appending one country prints:
//!
//! ```text
//! INFO Actor started entity_type="Country" size=3
//! INFO Created entity_type="Country" id=4 size=4
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
