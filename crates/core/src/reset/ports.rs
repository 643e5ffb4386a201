//! Port interface for the reset coordinator

use async_trait::async_trait;
use goalfuel_domain::Result;

/// Key-addressed removal over the domain blob store.
///
/// Removing a key that does not exist succeeds.
#[async_trait]
pub trait DomainStore: Send + Sync {
    async fn remove(&self, key: &str) -> Result<()>;
}
