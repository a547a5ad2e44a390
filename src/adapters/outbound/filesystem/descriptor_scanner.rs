use crate::ports::outbound::DescriptorScanner;
use crate::shared::Result;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// WalkDirScanner adapter locating descriptor files with `walkdir`
///
/// The walk runs on tokio's blocking pool. Symbolic links are never
/// followed, so link cycles cannot trap the scan, and entries that cannot
/// be read are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkDirScanner;

impl WalkDirScanner {
    pub fn new() -> Self {
        Self
    }
}

/// Files directly in `root` have walkdir depth 1, hence the offset.
fn walk(root: &Path, filename: &str, max_depth: i32) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    if let Ok(depth) = usize::try_from(max_depth) {
        walker = walker.max_depth(depth + 1);
    }

    let target = OsStr::new(filename);
    let mut found: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(root = %root.display(), "skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == target)
        .map(|entry| {
            dunce::canonicalize(entry.path()).unwrap_or_else(|_| entry.path().to_path_buf())
        })
        .collect();

    found.sort();
    found
}

#[async_trait]
impl DescriptorScanner for WalkDirScanner {
    async fn scan(&self, root: &Path, filename: &str, max_depth: i32) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();
        let filename = filename.to_string();
        let found = tokio::task::spawn_blocking(move || walk(&root, &filename, max_depth))
            .await
            .map_err(|e| anyhow::anyhow!("Descriptor scan was interrupted: {}", e))?;
        Ok(found)
    }
}
