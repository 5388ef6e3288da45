//! Error types for the Bee actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during bee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BeeError {
    /// The requested bee was not found.
    #[error("Bee not found: {0}")]
    NotFound(i32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl BeeError {
    /// Maps a framework failure for the bee with `id` onto the domain error.
    pub fn from_framework(id: i32, e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(_) => BeeError::NotFound(id),
            other => BeeError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for BeeError {
    fn from(msg: String) -> Self {
        BeeError::ActorCommunicationError(msg)
    }
}
