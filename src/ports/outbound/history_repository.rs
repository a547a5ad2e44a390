use crate::project_discovery::domain::CommandHistory;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// HistoryRepository port persisting custom commands per project
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Loads the history of the project whose descriptor is `project_path`
    ///
    /// # Errors
    /// Returns an error if an existing history file cannot be read.
    /// A missing file is an empty history, not an error.
    async fn load(&self, project_path: &Path) -> Result<CommandHistory>;

    /// Replaces the stored history of `project_path`
    ///
    /// # Errors
    /// Returns an error if the cache file cannot be written
    async fn save(&self, project_path: &Path, history: &CommandHistory) -> Result<()>;

    /// Location of the cache file backing `project_path`'s history
    fn history_path(&self, project_path: &Path) -> PathBuf;

    /// Maximum number of entries kept per project
    fn limit(&self) -> usize;
}
