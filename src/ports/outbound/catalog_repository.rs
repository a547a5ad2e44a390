use crate::shared::Result;
use async_trait::async_trait;

/// RemoteCatalogFetcher port for downloading an archetype catalog
#[async_trait]
pub trait RemoteCatalogFetcher: Send + Sync {
    /// Downloads the catalog at `url`
    ///
    /// # Errors
    /// Returns an error on network failure, timeout or a non-success status
    async fn fetch_catalog(&self, url: &str) -> Result<String>;
}

/// CatalogStore port for catalogs kept on disk
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Catalog shipped with or pointed to by the configuration, if any
    async fn read_provided(&self) -> Result<Option<String>>;

    /// Last successfully downloaded remote catalog, if any
    async fn read_local(&self) -> Result<Option<String>>;

    /// Persists a downloaded catalog for offline reuse
    async fn write_local(&self, content: &str) -> Result<()>;
}
