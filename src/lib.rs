#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Countries API
//!
//! > **An in-memory collection of countries served over HTTP.**
//!
//! Two endpoints: `GET /countries` lists the collection in insertion order, and
//! `POST /countries` appends a JSON object and returns it with a server-assigned
//! `id`.
//!
//! ## 🏗️ Design
//!
//! The collection is owned by a single Tokio task (a `ResourceActor`). HTTP
//! handlers never touch it directly; they send a message through a cloneable
//! client and await the reply. Because the actor handles one message at a
//! time, "find the largest id, add one, append" is a single critical section
//! even when many requests arrive at once.
//!
//! ### Identifier assignment
//! The next id is derived from the records present, not from a counter:
//! `max(id) + 1`, or `1` for an empty collection. A caller-supplied `id` is
//! always overwritten.
//!
//! ### Records
//! A [`Country`](model::Country) is an ordered JSON object. Only `id` is typed;
//! every other field is stored exactly as sent.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) that owns an ordered
//! collection and assigns ids, plus its [`ResourceClient`](framework::ResourceClient)
//! and the [`mock`](framework::mock) test utilities.
//!
//! ### 2. The Domain ([`model`], [`country_actor`], [`clients`])
//! The `Country` record, its payload and error types, and the
//! [`CountryClient`](clients::CountryClient) the rest of the app talks to.
//!
//! ### 3. The Surface ([`http`])
//! The axum route table, handlers, content negotiation and JSON error bodies.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! Starts the actor with its seed, sets up tracing, reads the configuration and
//! coordinates shutdown.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:5000
//!
//! curl localhost:5000/countries
//! curl -X POST localhost:5000/countries \
//!      -H 'content-type: application/json' \
//!      -d '{"name":"Germany","capital":"Berlin","area":357022}'
//! ```

pub mod clients;
pub mod config;
pub mod country_actor;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
