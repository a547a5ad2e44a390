use super::run_goal::RunGoalUseCase;
use crate::ports::outbound::{CommandRunner, HistoryRepository, ProgressReporter};
use crate::project_discovery::domain::{CommandHistory, ProjectNode};
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use std::path::PathBuf;

/// CustomGoalUseCase - runs free-form goals and remembers them per project
///
/// Every command that is run moves to the front of the project's history.
/// History problems never stop a build: an unreadable history is treated as
/// empty and a failed save is reported as a notice.
pub struct CustomGoalUseCase<H, C, P> {
    history_repository: H,
    goal_runner: RunGoalUseCase<C, P>,
}

impl<H, C, P> CustomGoalUseCase<H, C, P>
where
    H: HistoryRepository,
    C: CommandRunner,
    P: ProgressReporter,
{
    pub fn new(
        history_repository: H,
        runner: C,
        progress_reporter: P,
        executable: impl Into<String>,
    ) -> Self {
        Self {
            history_repository,
            goal_runner: RunGoalUseCase::new(runner, progress_reporter, executable),
        }
    }

    /// Recent commands of `project`, most recent first
    pub async fn history(&self, project: &ProjectNode) -> CommandHistory {
        match self.history_repository.load(project.descriptor_path()).await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("{}", e);
                CommandHistory::empty(self.history_repository.limit())
            }
        }
    }

    /// File backing the history, for editing it by hand
    pub fn history_path(&self, project: &ProjectNode) -> PathBuf {
        self.history_repository.history_path(project.descriptor_path())
    }

    /// Records `command` in the history, then runs it
    pub async fn execute(&self, project: &ProjectNode, command: &str) -> Result<bool> {
        let command = command.trim();
        let request = self.goal_runner.request(project, command)?;

        let history = self.history(project).await.promote(command);
        if let Err(e) = self
            .history_repository
            .save(project.descriptor_path(), &history)
            .await
        {
            self.goal_runner
                .progress_reporter()
                .report_error(&format!("⚠️  Command history was not saved: {}", e));
        }

        self.goal_runner.launch(&request).await
    }

    /// Runs the `position`-th (1-based) history entry again
    pub async fn rerun(&self, project: &ProjectNode, position: usize) -> Result<bool> {
        let history = self.history(project).await;
        let command = position
            .checked_sub(1)
            .and_then(|index| history.entries().get(index))
            .cloned()
            .ok_or_else(|| ExplorerError::InvalidValue {
                field: "history entry".to_string(),
                value: position.to_string(),
            })?;
        self.execute(project, &command).await
    }
}
