//! Generic actor framework for in-memory resource stores.
//!
//! This module provides the core building blocks for owning a collection of
//! resource entities inside a single task and exposing CRUD operations on it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entities
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
