use async_trait::async_trait;

use crate::error::Result;

/// Cache-or-fetch lookup for one resource kind.
///
/// Implementations consult the store first and return what is there without
/// any freshness check. Only when the store holds nothing for `key` do they
/// call their provider (once), normalize, persist and return the new records.
#[async_trait]
pub trait Resolver: Send + Sync {
    type Key: ?Sized + Sync;
    type Output: Send;

    async fn resolve(&self, key: &Self::Key) -> Result<Self::Output>;
}
