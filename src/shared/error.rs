use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument mistakes from
/// failures that happened while talking to the filesystem, network or `mvn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The build tool ran but reported a failure
    BuildFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (I/O error, network error, missing project, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BuildFailed => write!(f, "Build Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for project discovery and goal execution.
///
/// Most of these are recovered from locally (a dropped descriptor, a skipped
/// catalog source); they only reach the user when a command cannot produce
/// any result at all.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Failed to scan directory: {path}\nDetails: {details}")]
    ScanError { path: PathBuf, details: String },

    #[error("Failed to parse descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the pom.xml file is well-formed XML")]
    DescriptorParseError { path: PathBuf, details: String },

    #[error("Declared module '{module}' has no descriptor at {path}")]
    DanglingModuleReference { module: String, path: PathBuf },

    #[error("Failed to load archetype catalog from {source_name}\nDetails: {details}")]
    CatalogFetchError { source_name: String, details: String },

    #[error("Failed to access cache file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the cache directory is writable")]
    CacheIOError { path: PathBuf, details: String },

    #[error("Failed to write output file: {path}\nDetails: {details}")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid workspace folder: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --workspace")]
    InvalidWorkspacePath { path: PathBuf, reason: String },

    #[error("No Maven project found for: {path}\n\n💡 Hint: Run `mvn-explorer projects` to list the projects that were discovered")]
    ProjectNotFound { path: PathBuf },

    #[error("{count} Maven projects were found; which one is meant?\n\n💡 Hint: Pass the path of a pom.xml (or its directory). `mvn-explorer projects` lists them")]
    ProjectSelectionRequired { count: usize },

    #[error("Error occurred in generating effective pom.\nDetails: {details}")]
    EffectivePomFailed { details: String },

    #[error("Invalid value for {field}: '{value}'\n\n💡 Hint: Only letters, digits, '_', '-' and '.' are allowed")]
    InvalidValue { field: String, value: String },

    #[error("Invalid config: {message}")]
    ConfigError { message: String },
}

impl ExplorerError {
    /// Exit code the CLI reports when this error ends a command
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ExplorerError::InvalidValue { .. }
            | ExplorerError::InvalidWorkspacePath { .. }
            | ExplorerError::ConfigError { .. }
            | ExplorerError::ProjectSelectionRequired { .. } => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}
