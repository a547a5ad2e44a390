/// Process adapters for launching the build tool
mod shell_command_runner;

pub use shell_command_runner::{DryRunCommandRunner, ShellCommandRunner};
