use crate::bee_actor::BeeError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Bee, BeeCreate, BeeUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Bee actor.
///
/// This is the entity store contract seen by the HTTP layer: `list` and `get`
/// come from [`ActorClient`], the mutations live here.
#[derive(Clone)]
pub struct BeeClient {
    inner: ResourceClient<Bee>,
}

impl BeeClient {
    pub fn new(inner: ResourceClient<Bee>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Bee> for BeeClient {
    type Error = BeeError;

    fn inner(&self) -> &ResourceClient<Bee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BeeError::ActorCommunicationError(e.to_string())
    }
}

impl BeeClient {
    /// Stores a new bee and returns it with its assigned ID.
    #[instrument(skip(self))]
    pub async fn create_bee(&self, name: String) -> Result<Bee, BeeError> {
        debug!("Sending request");
        self.inner
            .create(BeeCreate { name })
            .await
            .map_err(|e| BeeError::ActorCommunicationError(e.to_string()))
    }

    /// Renames the bee with `id`, returning its new state.
    #[instrument(skip(self))]
    pub async fn update_bee(&self, id: i32, name: String) -> Result<Bee, BeeError> {
        debug!("Sending request");
        self.inner
            .update(id, BeeUpdate { name })
            .await
            .map_err(|e| BeeError::from_framework(id, e))
    }

    /// Removes the bee with `id` and returns what was stored.
    #[instrument(skip(self))]
    pub async fn delete_bee(&self, id: i32) -> Result<Bee, BeeError> {
        debug!("Sending request");
        self.inner
            .delete(id)
            .await
            .map_err(|e| BeeError::from_framework(id, e))
    }
}
