use super::file_reader::safe_read_file;
use crate::ports::outbound::HistoryRepository;
use crate::project_discovery::domain::CommandHistory;
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

/// FileHistoryRepository adapter keeping one history file per project
///
/// Files live under `<cache-dir>/history/` and are named after the BLAKE3
/// hash of the project's descriptor path. Saves write a temporary sibling
/// file and rename it into place; saves from this process are serialized.
pub struct FileHistoryRepository {
    history_dir: PathBuf,
    limit: usize,
    write_lock: Mutex<()>,
}

impl FileHistoryRepository {
    pub fn new(cache_dir: &Path, limit: usize) -> Self {
        Self {
            history_dir: cache_dir.join("history"),
            limit,
            write_lock: Mutex::new(()),
        }
    }

    fn write_atomically(dir: &Path, path: &Path, content: &str) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.flush()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    async fn load(&self, project_path: &Path) -> Result<CommandHistory> {
        let path = self.history_path(project_path);
        let limit = self.limit;
        let content = tokio::task::spawn_blocking({
            let path = path.clone();
            move || safe_read_file(&path, "command history")
        })
        .await
        .map_err(|e| anyhow::anyhow!("History read was interrupted: {}", e))?
        .map_err(|e| ExplorerError::CacheIOError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(match content {
            Some(content) => CommandHistory::from_lines(content.lines(), limit),
            None => CommandHistory::empty(limit),
        })
    }

    async fn save(&self, project_path: &Path, history: &CommandHistory) -> Result<()> {
        let path = self.history_path(project_path);
        let dir = self.history_dir.clone();
        let content = history.to_file_content();

        let _guard = self.write_lock.lock().await;
        tokio::task::spawn_blocking({
            let path = path.clone();
            move || Self::write_atomically(&dir, &path, &content)
        })
        .await
        .map_err(|e| anyhow::anyhow!("History write was interrupted: {}", e))?
        .map_err(|e| ExplorerError::CacheIOError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), entries = history.len(), "history saved");
        Ok(())
    }

    fn history_path(&self, project_path: &Path) -> PathBuf {
        let key = blake3::hash(project_path.to_string_lossy().as_bytes());
        self.history_dir.join(format!("{}.txt", key.to_hex()))
    }

    fn limit(&self) -> usize {
        self.limit
    }
}
