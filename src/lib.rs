#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Bee API
//!
//! > **A tiny CRUD service for bees, backed by a resource actor.**
//!
//! The service keeps every bee in memory, inside a single Tokio task, and exposes
//! list/get/create/update/delete over HTTP with `axum`. It can optionally attach
//! OpenTelemetry tracing to its root route.
//!
//! ## 🏗️ Design
//!
//! ### The store is an actor
//! Handlers run concurrently, but the collection of bees is owned by one
//! [`ResourceActor`](framework::ResourceActor). Every request becomes a message and the
//! actor answers them one at a time, so creates, updates and deletes are linearized
//! without locks.
//!
//! ### Collaborators are injected
//! The [`BeeClient`](clients::BeeClient) and the optional tracer are built once in
//! `main` and reach handlers through [`AppState`](api::AppState).
//!
//! ### Errors are typed per layer
//! [`FrameworkError`](framework::FrameworkError) for actor plumbing,
//! [`BeeError`](bee_actor::BeeError) for the domain and [`ApiError`](api::ApiError) for
//! HTTP status mapping. "Not found" is the only domain failure and becomes a 404.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: generic `ActorEntity` / `ResourceActor` / `ResourceClient`, plus mocks.
//! - [`model`] and [`bee_actor`]: the `Bee` entity and its actor factory.
//! - [`clients`]: `BeeClient`, the store contract the HTTP layer talks to.
//! - [`api`]: router, handlers, error mapping and Swagger docs.
//! - [`lifecycle`]: `BeeSystem` startup/shutdown, logging and the tracer provider.
//! - [`config`]: command-line and environment settings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Plain service on 127.0.0.1:5000
//! RUST_LOG=info cargo run
//!
//! # Traced root route, spans printed to stdout
//! cargo run -- --traced
//!
//! # Traced, exported over OTLP/HTTP
//! OTEL_EXPORTER_OTLP_ENDPOINT=https://collector.example/v1/traces \
//! OTEL_EXPORTER_OTLP_HEADERS=x-api-key=secret cargo run -- --traced
//! ```

pub mod api;
pub mod bee_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
