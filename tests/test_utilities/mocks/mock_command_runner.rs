use async_trait::async_trait;
use mvn_explorer::ports::outbound::{CapturedOutput, TerminalRequest};
use mvn_explorer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner that records every launch instead of running it
///
/// Captured runs answer with a canned `CapturedOutput`. When a file body is
/// configured, it is written to the `-Doutput="..."` location of the
/// command, the way `help:effective-pom` does.
#[derive(Clone, Default)]
pub struct MockCommandRunner {
    terminal_runs: Arc<Mutex<Vec<TerminalRequest>>>,
    captured_runs: Arc<Mutex<Vec<String>>>,
    terminal_success: bool,
    captured: CapturedOutput,
    output_file: Option<String>,
}

#[allow(dead_code)]
impl MockCommandRunner {
    pub fn new() -> Self {
        Self {
            terminal_success: true,
            captured: CapturedOutput {
                success: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            terminal_success: false,
            ..Self::new()
        }
    }

    pub fn with_captured(mut self, captured: CapturedOutput) -> Self {
        self.captured = captured;
        self
    }

    pub fn with_output_file(mut self, content: &str) -> Self {
        self.output_file = Some(content.to_string());
        self
    }

    pub fn terminal_runs(&self) -> Vec<TerminalRequest> {
        self.terminal_runs.lock().unwrap().clone()
    }

    pub fn captured_runs(&self) -> Vec<String> {
        self.captured_runs.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run_in_terminal(&self, request: &TerminalRequest) -> Result<bool> {
        self.terminal_runs.lock().unwrap().push(request.clone());
        Ok(self.terminal_success)
    }

    async fn run_captured(&self, command: &CommandLine) -> Result<CapturedOutput> {
        self.captured_runs.lock().unwrap().push(command.to_string());
        if let Some(content) = &self.output_file {
            let output = command
                .args()
                .iter()
                .find_map(|arg| arg.strip_prefix("-Doutput=\""))
                .and_then(|rest| rest.strip_suffix('"'));
            if let Some(path) = output {
                std::fs::write(path, content)?;
            }
        }
        Ok(self.captured.clone())
    }
}
