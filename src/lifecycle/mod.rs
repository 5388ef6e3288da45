//! # System Lifecycle & Orchestration
//!
//! Everything the service needs before the first request and after the last one.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate the bee store actor and its client
//! 2. **Lifecycle Management** - Spawn the actor and keep its task handle
//! 3. **Graceful Shutdown** - Drop clients, then await the actor draining its queue
//! 4. **Observability Setup** - Structured logging ([`setup_tracing`]) and the optional
//!    OpenTelemetry tracer provider ([`build_tracer_provider`])
//!
//! ## Shutdown Ordering
//!
//! The actor loop exits only once *every* [`BeeClient`](crate::clients::BeeClient) clone
//! is gone. The HTTP router holds clones in its state, so the server must be stopped
//! before [`BeeSystem::shutdown`] is awaited.

pub mod bee_system;
pub mod telemetry;
pub mod tracing;

pub use bee_system::*;
pub use telemetry::*;
pub use self::tracing::*;
