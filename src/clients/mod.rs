//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod bee_client;

pub use actor_client::*;
pub use bee_client::*;
