use tracing::{error, info};

use crate::clients::CountryClient;
use crate::model::Country;

/// The runtime orchestrator for the countries service.
///
/// `CountrySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Country actor
/// - **Initial State**: Handing the seed collection to the actor before it starts
///
/// # Example
///
/// ```ignore
/// let system = CountrySystem::new(32, seed_countries());
///
/// let countries = system.country_client.list_countries().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CountrySystem {
    /// Client for interacting with the Country actor
    pub country_client: CountryClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CountrySystem {
    /// Spawns the Country actor holding `seed` and returns the running system.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(buffer_size: usize, seed: Vec<Country>) -> Self {
        let (country_actor, country_client) = crate::country_actor::new(buffer_size, seed);
        let handle = tokio::spawn(country_actor.run());

        Self {
            country_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor task. The actor only
    /// stops once *every* clone of the client is gone, so clones handed to the
    /// HTTP router must be dropped first (i.e. the server must have stopped).
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the last sender makes the actor's `recv()` return `None`.
        drop(self.country_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
