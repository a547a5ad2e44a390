use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// DescriptorScanner port for locating build descriptors below a directory
///
/// Implementations must not share mutable state between calls so that
/// independent roots can be scanned concurrently.
#[async_trait]
pub trait DescriptorScanner: Send + Sync {
    /// Finds every file named `filename` below `root`
    ///
    /// # Arguments
    /// * `root` - Directory to start from
    /// * `filename` - Base name to match (e.g. `pom.xml`)
    /// * `max_depth` - Files directly inside `root` are at depth 0; a
    ///   subdirectory is only entered while the remaining depth is positive.
    ///   A negative value means unbounded.
    ///
    /// # Returns
    /// Absolute paths in lexical order. Unreadable directories are skipped,
    /// so the result may be partial but is never an error for them.
    ///
    /// # Errors
    /// Returns an error only if the scan could not run at all
    async fn scan(&self, root: &Path, filename: &str, max_depth: i32) -> Result<Vec<PathBuf>>;
}
