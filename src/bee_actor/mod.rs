//! Bee-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BeeClient;
use crate::framework::ResourceActor;
use crate::model::Bee;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Number of requests that may queue up in front of the store actor.
pub const BEE_ACTOR_BUFFER: usize = 32;

/// Creates a new Bee actor and its client.
///
/// IDs start at 1 and are never handed out twice, even after a delete.
pub fn new() -> (ResourceActor<Bee>, BeeClient) {
    let (actor, generic_client) = ResourceActor::new(BEE_ACTOR_BUFFER, bee_id_sequence(1));
    let client = BeeClient::new(generic_client);

    (actor, client)
}

/// Monotonic ID generator starting at `first`. Yields `None` once past `i32::MAX`
/// instead of wrapping back onto IDs already in use.
fn bee_id_sequence(first: i64) -> impl Fn() -> Option<i32> + Send + Sync + 'static {
    let counter = Arc::new(AtomicI64::new(first));
    move || i32::try_from(counter.fetch_add(1, Ordering::SeqCst)).ok()
}
