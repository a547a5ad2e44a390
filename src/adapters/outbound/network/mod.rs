/// Network adapters for external HTTP calls
mod remote_catalog_client;

pub use remote_catalog_client::{HttpCatalogClient, DEFAULT_REMOTE_CATALOG_URL};
