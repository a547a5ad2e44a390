use crate::shared::error::ExplorerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a descriptor or catalog file read from disk (32 MB).
/// The central archetype catalog is a few MB; anything far beyond that is
/// not something we want to buffer in memory.
pub const MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file, returning its size
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "pom.xml", "archetype catalog")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that a workspace folder exists and is a directory
///
/// Symbolic links are accepted here (workspace folders are often linked),
/// but the scan itself never follows links below the root.
pub fn validate_workspace_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExplorerError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ExplorerError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pom.xml");
        fs::write(&file_path, "<project/>").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/pom.xml");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.txt");
        fs::write(&target, "x").unwrap();
        let link = temp_dir.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "write").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_regular_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pom.xml");
        fs::write(&file_path, "12345").unwrap();

        assert_eq!(validate_regular_file(&file_path, "pom.xml").unwrap(), 5);
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "pom.xml");
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size() {
        let path = PathBuf::from("/test/pom.xml");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
        let err = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_validate_workspace_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_workspace_dir(temp_dir.path()).is_ok());

        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "x").unwrap();
        let err = validate_workspace_dir(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));

        let err = validate_workspace_dir(&temp_dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }
}
