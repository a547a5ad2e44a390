use super::file_reader::safe_read_file;
use crate::ports::outbound::CatalogStore;
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the cached remote catalog inside the cache directory
pub const LOCAL_CATALOG_FILENAME: &str = "archetype-catalog.xml";

/// FileCatalogStore adapter for the provided and locally cached catalogs
pub struct FileCatalogStore {
    provided_path: Option<PathBuf>,
    local_path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(cache_dir: &Path, provided_path: Option<PathBuf>) -> Self {
        Self {
            provided_path,
            local_path: cache_dir.join(LOCAL_CATALOG_FILENAME),
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    async fn read(path: PathBuf, description: &'static str) -> Result<Option<String>> {
        let source = path.clone();
        tokio::task::spawn_blocking(move || safe_read_file(&path, description))
            .await
            .map_err(|e| anyhow::anyhow!("Catalog read was interrupted: {}", e))?
            .map_err(|e| {
                ExplorerError::CatalogFetchError {
                    source_name: source.display().to_string(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    async fn read_provided(&self) -> Result<Option<String>> {
        match &self.provided_path {
            Some(path) => Self::read(path.clone(), "provided archetype catalog").await,
            None => Ok(None),
        }
    }

    async fn read_local(&self) -> Result<Option<String>> {
        Self::read(self.local_path.clone(), "local archetype catalog").await
    }

    async fn write_local(&self, content: &str) -> Result<()> {
        let path = self.local_path.clone();
        let content = content.to_string();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let dir = path.parent().unwrap_or(Path::new("."));
            fs::create_dir_all(dir)?;
            let mut temp = NamedTempFile::new_in(dir)?;
            temp.write_all(content.as_bytes())?;
            temp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| anyhow::anyhow!("Catalog write was interrupted: {}", e))?
        .map_err(|e| ExplorerError::CacheIOError {
            path: self.local_path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
