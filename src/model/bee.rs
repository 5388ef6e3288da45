use serde::{Deserialize, Serialize};

/// Represents a bee held in the in-memory store.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Bee`](#impl-ActorEntity-for-Bee) for details on:
/// - Creation parameters ([`BeeCreate`])
/// - Update parameters ([`BeeUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bee {
    pub id: i32,
    pub name: String,
}

impl Bee {
    /// Creates a new Bee instance.
    ///
    /// The store assigns `id` on creation; this constructor exists for tests and mocks.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Payload for creating a new bee.
///
/// Unknown fields, including a client-supplied `id`, are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeeCreate {
    pub name: String,
}

/// Payload for renaming an existing bee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeeUpdate {
    pub name: String,
}
