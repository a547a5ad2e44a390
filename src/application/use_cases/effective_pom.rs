use crate::ports::outbound::{CommandRunner, ProgressReporter};
use crate::project_discovery::services::CommandLine;
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// EffectivePomUseCase - asks the build tool for a project's effective POM
///
/// The tool writes the result to a file below `output_dir`; the run only
/// counts as successful when it exits with status 0 and prints nothing on
/// stderr.
pub struct EffectivePomUseCase<C, P> {
    runner: C,
    progress_reporter: P,
    executable: String,
    output_dir: PathBuf,
}

impl<C, P> EffectivePomUseCase<C, P>
where
    C: CommandRunner,
    P: ProgressReporter,
{
    pub fn new(
        runner: C,
        progress_reporter: P,
        executable: impl Into<String>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            runner,
            progress_reporter,
            executable: executable.into(),
            output_dir,
        }
    }

    /// Output file for a descriptor, stable across runs
    pub fn output_path(&self, descriptor: &Path) -> PathBuf {
        let key = blake3::hash(descriptor.to_string_lossy().as_bytes()).to_hex();
        self.output_dir
            .join(format!("{}-effective-pom.xml", &key.as_str()[..16]))
    }

    /// # Returns
    /// The effective POM as XML text
    ///
    /// # Errors
    /// Returns `EffectivePomFailed` when the tool fails, writes to stderr or
    /// produces no file
    pub async fn execute(&self, descriptor: &Path) -> Result<String> {
        let output = self.output_path(descriptor);
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ExplorerError::CacheIOError {
                path: self.output_dir.clone(),
                details: e.to_string(),
            })?;
        // A leftover from an earlier run must not pass for this run's result
        if let Err(e) = tokio::fs::remove_file(&output).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %output.display(), "could not remove old output: {}", e);
            }
        }

        let command = CommandLine::effective_pom(&self.executable, descriptor, &output);
        self.progress_reporter
            .start_activity("Generating effective pom ... ");
        let captured = match self.runner.run_captured(&command).await {
            Ok(captured) => captured,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Error occurred in generating effective pom.");
                return Err(ExplorerError::EffectivePomFailed {
                    details: e.to_string(),
                }
                .into());
            }
        };

        if !captured.success || !captured.stderr.trim().is_empty() {
            self.progress_reporter
                .report_error("❌ Error occurred in generating effective pom.");
            let details = if captured.stderr.trim().is_empty() {
                last_lines(&captured.stdout, 20)
            } else {
                captured.stderr.trim().to_string()
            };
            return Err(ExplorerError::EffectivePomFailed { details }.into());
        }

        match tokio::fs::read_to_string(&output).await {
            Ok(content) if !content.trim().is_empty() => {
                self.progress_reporter
                    .report_completion(&format!("✅ Effective pom generated: {}", output.display()));
                Ok(content)
            }
            Ok(_) | Err(_) => {
                self.progress_reporter
                    .report_error("❌ Error occurred in generating effective pom.");
                Err(ExplorerError::EffectivePomFailed {
                    details: format!("No output was written to {}", output.display()),
                }
                .into())
            }
        }
    }
}

/// The tail of a build log is where Maven explains a failure
fn last_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
