use crate::ports::outbound::{CapturedOutput, CommandRunner, TerminalRequest};
use crate::project_discovery::services::CommandLine;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Builds a shell invocation for a rendered command line.
///
/// Goal strings may carry their own quoting and flags, so the whole line is
/// handed to the platform shell rather than split here.
fn shell_command(line: &str) -> Command {
    #[cfg(windows)]
    {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(line);
        command
    }
    #[cfg(not(windows))]
    {
        let mut command = Command::new("sh");
        command.arg("-c").arg(line);
        command
    }
}

/// ShellCommandRunner adapter launching the build tool through the shell
///
/// Terminal runs inherit stdio, so the build's output streams straight to
/// the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn run_in_terminal(&self, request: &TerminalRequest) -> Result<bool> {
        let line = request.command.to_string();
        tracing::debug!(terminal = %request.name, command = %line, "launching");

        let mut command = shell_command(&line);
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &request.cwd {
            command.current_dir(cwd);
        }

        let status = command
            .status()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start `{}`: {}", line, e))?;
        Ok(status.success())
    }

    async fn run_captured(&self, command_line: &CommandLine) -> Result<CapturedOutput> {
        let line = command_line.to_string();
        tracing::debug!(command = %line, "running with captured output");

        let output = shell_command(&line)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start `{}`: {}", line, e))?;

        Ok(CapturedOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// DryRunCommandRunner adapter that only prints what would run
///
/// Captured runs report failure, since nothing was produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunCommandRunner;

impl DryRunCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for DryRunCommandRunner {
    async fn run_in_terminal(&self, request: &TerminalRequest) -> Result<bool> {
        match &request.cwd {
            Some(cwd) => println!("[{}] (in {}) {}", request.name, cwd.display(), request.command),
            None => println!("[{}] {}", request.name, request.command),
        }
        Ok(true)
    }

    async fn run_captured(&self, command_line: &CommandLine) -> Result<CapturedOutput> {
        println!("{}", command_line);
        Ok(CapturedOutput {
            success: false,
            stdout: String::new(),
            stderr: "dry run: command was not executed".to_string(),
        })
    }
}
