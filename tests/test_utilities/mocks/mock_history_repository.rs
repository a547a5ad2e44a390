use async_trait::async_trait;
use mvn_explorer::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory HistoryRepository
#[derive(Clone)]
pub struct MockHistoryRepository {
    histories: Arc<Mutex<HashMap<PathBuf, Vec<String>>>>,
    limit: usize,
    fail_saves: bool,
}

#[allow(dead_code)]
impl MockHistoryRepository {
    pub fn new(limit: usize) -> Self {
        Self {
            histories: Arc::new(Mutex::new(HashMap::new())),
            limit,
            fail_saves: false,
        }
    }

    pub fn read_only(limit: usize) -> Self {
        Self {
            fail_saves: true,
            ..Self::new(limit)
        }
    }

    pub fn with_entries(self, project_path: &Path, entries: &[&str]) -> Self {
        self.histories.lock().unwrap().insert(
            project_path.to_path_buf(),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }

    pub fn entries(&self, project_path: &Path) -> Vec<String> {
        self.histories
            .lock()
            .unwrap()
            .get(project_path)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn load(&self, project_path: &Path) -> Result<CommandHistory> {
        Ok(CommandHistory::from_lines(
            self.entries(project_path),
            self.limit,
        ))
    }

    async fn save(&self, project_path: &Path, history: &CommandHistory) -> Result<()> {
        if self.fail_saves {
            anyhow::bail!("history is read-only");
        }
        self.histories
            .lock()
            .unwrap()
            .insert(project_path.to_path_buf(), history.entries().to_vec());
        Ok(())
    }

    fn history_path(&self, project_path: &Path) -> PathBuf {
        project_path.with_extension("history.txt")
    }

    fn limit(&self) -> usize {
        self.limit
    }
}
