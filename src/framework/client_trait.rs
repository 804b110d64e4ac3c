//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and `remove`
//! built on top of a generic [`ResourceClient`].

use super::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Trait for resource-specific clients to inherit the standard lookups.
///
/// Implementors supply the inner client and an error mapping; `get`, `list` and `remove`
/// come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of every entity, in store order.
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Remove an entity by ID.
    ///
    /// Returns `false` when the id is unknown or the entity refused removal.
    #[instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<bool, Self::Error> {
        debug!("Sending request");
        match self.inner().delete(id).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_rejection() => {
                debug!(reason = %e, "Removal rejected");
                Ok(false)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
