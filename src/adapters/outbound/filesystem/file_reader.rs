use crate::ports::outbound::{DescriptorReader, DescriptorSource};
use crate::shared::error::ExplorerError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Safely read a text file with security checks:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
///
/// Returns `Ok(None)` when nothing exists at `path`.
pub(crate) fn safe_read_file(path: &Path, file_type: &str) -> Result<Option<String>> {
    match fs::symlink_metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => anyhow::bail!("Failed to read {} metadata: {}", file_type, e),
    }

    let file_size = validate_regular_file(path, file_type)?;
    validate_file_size(file_size, path, MAX_FILE_SIZE)?;

    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))?;
    Ok(Some(content))
}

/// FileSystemReader adapter for reading descriptor files from disk
///
/// Paths reached through `..` module entries are resolved to their
/// canonical form so the discovery cache sees one key per file.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_blocking(path: &Path) -> Result<Option<DescriptorSource>> {
        let Some(content) = safe_read_file(path, "pom.xml")? else {
            return Ok(None);
        };
        let canonical_path = dunce::canonicalize(path).map_err(|e| ExplorerError::ScanError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(Some(DescriptorSource {
            canonical_path,
            content,
        }))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DescriptorReader for FileSystemReader {
    async fn read_descriptor(&self, path: &Path) -> Result<Option<DescriptorSource>> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_blocking(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Descriptor read was interrupted: {}", e))?
    }
}
