use crate::clients::BeeClient;
use tracing::{error, info};

/// The runtime orchestrator for the bee store.
///
/// `BeeSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actor
/// - **Dependency Wiring**: Handing out the [`BeeClient`] that handlers receive through state
///
/// # Example
///
/// ```ignore
/// let system = BeeSystem::new();
/// let bee = system.bee_client.create_bee("Scout".to_string()).await?;
/// system.shutdown().await?;
/// ```
pub struct BeeSystem {
    /// Client for interacting with the Bee actor
    pub bee_client: BeeClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BeeSystem {
    /// Creates the bee actor and spawns it on the current Tokio runtime.
    ///
    /// The store starts empty; nothing survives a restart.
    pub fn new() -> Self {
        let (bee_actor, bee_client) = crate::bee_actor::new();

        // The bee store has no dependencies (Context = ())
        let bee_handle = tokio::spawn(bee_actor.run(()));

        Self {
            bee_client,
            handles: vec![bee_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the last client closes the channel; the actor finishes the requests
    /// already queued and exits. Any clone still alive elsewhere keeps the actor
    /// running, so callers must release theirs first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.bee_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BeeSystem {
    fn default() -> Self {
        Self::new()
    }
}
