//! Configuration file support for mvn-explorer.
//!
//! Provides YAML-based configuration through `mvn-explorer.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mvn_explorer::adapters::outbound::network::DEFAULT_REMOTE_CATALOG_URL;
use mvn_explorer::project_discovery::domain::DEFAULT_HISTORY_LIMIT;
use mvn_explorer::shared::error::ExplorerError;
use mvn_explorer::shared::Result;

const CONFIG_FILENAME: &str = "mvn-explorer.config.yml";

const DEFAULT_MAX_DEPTH: i32 = -1;
const DEFAULT_EXECUTABLE: &str = "mvn";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;
const MAX_CATALOG_TIMEOUT_SECS: u64 = 600;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub workspace_folders: Option<Vec<PathBuf>>,
    /// Negative means unbounded
    pub max_depth_of_pom: Option<i32>,
    pub executable: Option<String>,
    pub history_limit: Option<usize>,
    pub cache_dir: Option<PathBuf>,
    pub remote_catalog_url: Option<String>,
    pub catalog_timeout_secs: Option<u64>,
    pub provided_catalog: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Relative paths in a config file are relative to the file itself
    fn rebase(mut self, dir: &Path) -> Self {
        let rebase = |path: PathBuf| if path.is_relative() { dir.join(path) } else { path };
        self.workspace_folders = self
            .workspace_folders
            .map(|folders| folders.into_iter().map(rebase).collect());
        self.cache_dir = self.cache_dir.map(rebase);
        self.provided_catalog = self.provided_catalog.map(rebase);
        self
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    let dir = path.parent().unwrap_or(Path::new("."));
    Ok(config.rebase(dir))
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(executable) = &config.executable {
        if executable.trim().is_empty() || executable.contains(['\n', '\r']) {
            return invalid(
                "executable must be a single non-empty command.\n\n\
                 💡 Hint: Use e.g. \"mvn\", \"./mvnw\" or an absolute path to mvn."
                    .to_string(),
            );
        }
    }

    if config.history_limit == Some(0) {
        return invalid(format!(
            "history_limit must be at least 1.\n\n\
             💡 Hint: The default keeps the {} most recent commands.",
            DEFAULT_HISTORY_LIMIT
        ));
    }

    if let Some(timeout) = config.catalog_timeout_secs {
        if timeout == 0 || timeout > MAX_CATALOG_TIMEOUT_SECS {
            return invalid(format!(
                "catalog_timeout_secs must be between 1 and {} (got {}).",
                MAX_CATALOG_TIMEOUT_SECS, timeout
            ));
        }
    }

    if let Some(url) = &config.remote_catalog_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return invalid(format!(
                "remote_catalog_url must be an http(s) URL (got '{}').",
                url
            ));
        }
    }

    if let Some(folders) = &config.workspace_folders {
        if folders.iter().any(|f| f.as_os_str().is_empty()) {
            return invalid("workspace_folders must not contain empty entries.".to_string());
        }
    }

    Ok(())
}

fn invalid(message: String) -> Result<()> {
    Err(ExplorerError::ConfigError { message }.into())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub workspace_folders: Vec<PathBuf>,
    pub max_depth: Option<i32>,
    pub executable: Option<String>,
    pub cache_dir: Option<PathBuf>,
}

/// Effective settings after defaults, config file and overrides are applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub workspace_folders: Vec<PathBuf>,
    pub max_depth: i32,
    pub executable: String,
    pub history_limit: usize,
    pub cache_dir: PathBuf,
    pub remote_catalog_url: String,
    pub catalog_timeout: Duration,
    pub provided_catalog: Option<PathBuf>,
}

impl Settings {
    /// Merges the layers. Without any workspace folder, `current_dir` is
    /// used.
    pub fn resolve(config: ConfigFile, overrides: Overrides, current_dir: &Path) -> Self {
        let workspace_folders = if !overrides.workspace_folders.is_empty() {
            overrides.workspace_folders
        } else {
            config
                .workspace_folders
                .filter(|folders| !folders.is_empty())
                .unwrap_or_else(|| vec![current_dir.to_path_buf()])
        };

        Self {
            workspace_folders,
            max_depth: overrides
                .max_depth
                .or(config.max_depth_of_pom)
                .unwrap_or(DEFAULT_MAX_DEPTH),
            executable: overrides
                .executable
                .or(config.executable)
                .unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string()),
            history_limit: config.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
            cache_dir: overrides
                .cache_dir
                .or(config.cache_dir)
                .unwrap_or_else(default_cache_dir),
            remote_catalog_url: config
                .remote_catalog_url
                .unwrap_or_else(|| DEFAULT_REMOTE_CATALOG_URL.to_string()),
            catalog_timeout: Duration::from_secs(
                config
                    .catalog_timeout_secs
                    .unwrap_or(DEFAULT_CATALOG_TIMEOUT_SECS),
            ),
            provided_catalog: config.provided_catalog,
        }
    }

    pub fn effective_pom_dir(&self) -> PathBuf {
        self.cache_dir.join("effective-pom")
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mvn-explorer")
}
