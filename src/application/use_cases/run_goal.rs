use crate::ports::outbound::{CommandRunner, ProgressReporter, TerminalRequest};
use crate::project_discovery::domain::ProjectNode;
use crate::project_discovery::services::CommandLine;
use crate::shared::error::ExplorerError;
use crate::shared::Result;

/// RunGoalUseCase - runs a build goal against one project
///
/// The command is `<mvn> <goal> -f "<descriptor>"`, launched in a terminal
/// labelled after the project's artifact id.
pub struct RunGoalUseCase<C, P> {
    runner: C,
    progress_reporter: P,
    executable: String,
}

impl<C, P> RunGoalUseCase<C, P>
where
    C: CommandRunner,
    P: ProgressReporter,
{
    pub fn new(runner: C, progress_reporter: P, executable: impl Into<String>) -> Self {
        Self {
            runner,
            progress_reporter,
            executable: executable.into(),
        }
    }

    /// Builds the request without running it
    pub fn request(&self, project: &ProjectNode, goal: &str) -> Result<TerminalRequest> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(ExplorerError::InvalidValue {
                field: "goal".to_string(),
                value: goal.to_string(),
            }
            .into());
        }
        let command = CommandLine::for_goals(&self.executable, goal, project.descriptor_path());
        Ok(TerminalRequest::new(command, project.terminal_name())
            .in_dir(project.project_dir().to_path_buf()))
    }

    /// # Returns
    /// `true` if the build succeeded
    pub async fn execute(&self, project: &ProjectNode, goal: &str) -> Result<bool> {
        let request = self.request(project, goal)?;
        self.launch(&request).await
    }

    pub(crate) async fn launch(&self, request: &TerminalRequest) -> Result<bool> {
        self.progress_reporter
            .report(&format!("▶ [{}] {}", request.name, request.command));
        self.runner.run_in_terminal(request).await
    }

    pub(crate) fn progress_reporter(&self) -> &P {
        &self.progress_reporter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::CapturedOutput;
    use crate::project_discovery::domain::PomDocument;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRunner {
        requests: Mutex<Vec<TerminalRequest>>,
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run_in_terminal(&self, request: &TerminalRequest) -> Result<bool> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(true)
        }

        async fn run_captured(&self, _command: &CommandLine) -> Result<CapturedOutput> {
            Ok(CapturedOutput::default())
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn start_activity(&self, _message: &str) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn project() -> ProjectNode {
        ProjectNode::new(
            PathBuf::from("/ws/app/pom.xml"),
            PomDocument {
                artifact_id: "app".to_string(),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_execute_runs_goal_in_project_terminal() {
        let use_case = RunGoalUseCase::new(RecordingRunner::default(), SilentReporter, "mvn");

        assert!(use_case.execute(&project(), "clean install").await.unwrap());

        let requests = use_case.runner.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].command.to_string(),
            r#"mvn clean install -f "/ws/app/pom.xml""#
        );
        assert_eq!(requests[0].name, "Maven-app");
        assert_eq!(requests[0].cwd.as_deref(), Some(PathBuf::from("/ws/app").as_path()));
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_goal() {
        let use_case = RunGoalUseCase::new(RecordingRunner::default(), SilentReporter, "mvn");

        let err = use_case.execute(&project(), "   ").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExplorerError>(),
            Some(ExplorerError::InvalidValue { .. })
        ));
        assert!(use_case.runner.requests.lock().unwrap().is_empty());
    }
}
