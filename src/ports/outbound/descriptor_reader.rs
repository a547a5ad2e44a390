use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Content of a descriptor file together with its canonical location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSource {
    pub canonical_path: PathBuf,
    pub content: String,
}

/// DescriptorReader port for loading `pom.xml` files
#[async_trait]
pub trait DescriptorReader: Send + Sync {
    /// Reads a descriptor file
    ///
    /// # Returns
    /// `Ok(None)` when nothing exists at `path` (a dangling module reference
    /// is not an error), otherwise the canonical path and the file content
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read safely
    async fn read_descriptor(&self, path: &Path) -> Result<Option<DescriptorSource>>;
}
