//! # Structured Logging
//!
//! [`setup_tracing`] installs the global `tracing` subscriber once at startup.
//!
//! The compact format hides module paths (`with_target(false)`); the actor adds an
//! `entity_type` field instead, and client calls show up as inline spans:
//!
//! ```text
//! INFO Actor started entity_type="Bee"
//! INFO create_bee:Created entity_type="Bee" id=1 size=1
//! WARN Not found entity_type="Bee" id=7
//! ```
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`; without it the service logs at `info`.
//!
//! ```bash
//! RUST_LOG=debug cargo run                        # full request payloads
//! RUST_LOG=bee_api::framework=debug cargo run     # only the store actor
//! ```
//!
//! These logs are separate from the OpenTelemetry spans the traced root route
//! exports (see [`crate::lifecycle::telemetry`]).

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
