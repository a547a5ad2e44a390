use crate::project_discovery::services::CommandLine;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// A command handed to a terminal, labelled for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRequest {
    pub command: CommandLine,
    /// Terminal label, e.g. `Maven-my-app`
    pub name: String,
    /// Working directory; `None` keeps the current one
    pub cwd: Option<PathBuf>,
}

impl TerminalRequest {
    pub fn new(command: CommandLine, name: impl Into<String>) -> Self {
        Self {
            command,
            name: name.into(),
            cwd: None,
        }
    }

    pub fn in_dir(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }
}

/// Outcome of a command whose output was captured instead of shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// CommandRunner port for launching the build tool
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs a command with the user's terminal attached and waits for it
    ///
    /// # Returns
    /// `true` if the command reported success
    ///
    /// # Errors
    /// Returns an error if the command could not be started
    async fn run_in_terminal(&self, request: &TerminalRequest) -> Result<bool>;

    /// Runs a command, capturing its output
    ///
    /// # Errors
    /// Returns an error if the command could not be started
    async fn run_captured(&self, command: &CommandLine) -> Result<CapturedOutput>;
}
