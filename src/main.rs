mod cli;
mod config;

use cli::{ArchetypeCommand, Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile, Overrides, Settings};
use mvn_explorer::adapters::outbound::console::{
    CatalogRenderer, StderrProgressReporter, TreeRenderer,
};
use mvn_explorer::adapters::outbound::filesystem::{
    FileCatalogStore, FileHistoryRepository, FileSystemReader, FileSystemWriter, StdoutPresenter,
    WalkDirScanner,
};
use mvn_explorer::adapters::outbound::network::HttpCatalogClient;
use mvn_explorer::adapters::outbound::process::{DryRunCommandRunner, ShellCommandRunner};
use mvn_explorer::application::dto::{ArchetypeRequest, OutputFormat};
use mvn_explorer::application::use_cases::{
    ArchetypeCatalogUseCase, CustomGoalUseCase, EffectivePomUseCase, ProjectTreeUseCase,
    RunGoalUseCase, TreeSettings, WalkTreeUseCase,
};
use mvn_explorer::ports::outbound::{CommandRunner, NoopTreeObserver, OutputPresenter};
use mvn_explorer::project_discovery::domain::{ProjectNode, DESCRIPTOR_FILENAME};
use mvn_explorer::shared::error::{ExitCode, ExplorerError};
use mvn_explorer::shared::security::validate_workspace_dir;
use mvn_explorer::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

type Engine = ProjectTreeUseCase<WalkDirScanner, FileSystemReader, NoopTreeObserver>;

#[tokio::main]
async fn main() {
    init_tracing();

    let args = Args::parse_args();
    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            let code = e
                .downcast_ref::<ExplorerError>()
                .map(ExplorerError::exit_code)
                .unwrap_or(ExitCode::ApplicationError);
            process::exit(code.as_i32());
        }
    }
}

/// Diagnostics go to stderr so stdout stays clean for trees and POMs.
/// `RUST_LOG=mvn_explorer=debug` shows scanning and command details.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let current_dir = std::env::current_dir()?;
    let config = load_config(args.config.as_deref(), &current_dir)?;
    let overrides = Overrides {
        workspace_folders: args.workspaces.clone(),
        max_depth: args.max_depth,
        executable: args.executable.clone(),
        cache_dir: args.cache_dir.clone(),
    };
    let mut settings = Settings::resolve(config, overrides, &current_dir);
    settings.workspace_folders = canonical_workspaces(&settings.workspace_folders)?;
    tracing::debug!(?settings, "settings resolved");

    let engine: Engine = ProjectTreeUseCase::new(
        WalkDirScanner::new(),
        FileSystemReader::new(),
        NoopTreeObserver,
        TreeSettings::new(settings.workspace_folders.clone(), settings.max_depth),
    );

    if args.dry_run {
        dispatch(args.command, &settings, &engine, DryRunCommandRunner::new()).await
    } else {
        dispatch(args.command, &settings, &engine, ShellCommandRunner::new()).await
    }
}

fn load_config(explicit: Option<&str>, current_dir: &Path) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => {
            let config = load_config_from_path(Path::new(path))?;
            eprintln!("📄 Loaded config from: {}", path);
            Some(config)
        }
        None => {
            let config = discover_config(current_dir)?;
            if config.is_some() {
                eprintln!("📄 Auto-discovered config file in {}", current_dir.display());
            }
            config
        }
    };
    Ok(config.unwrap_or_default())
}

fn canonical_workspaces(folders: &[PathBuf]) -> Result<Vec<PathBuf>> {
    folders
        .iter()
        .map(|folder| -> Result<PathBuf> {
            validate_workspace_dir(folder)?;
            dunce::canonicalize(folder).map_err(|e| {
                ExplorerError::InvalidWorkspacePath {
                    path: folder.clone(),
                    reason: format!("Failed to canonicalize path: {}", e),
                }
                .into()
            })
        })
        .collect()
}

async fn dispatch<C>(
    command: Command,
    settings: &Settings,
    engine: &Engine,
    runner: C,
) -> Result<ExitCode>
where
    C: CommandRunner,
{
    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    match command {
        Command::Tree { format, output } => {
            let entries = WalkTreeUseCase::new(engine).execute().await;
            let rendered = TreeRenderer::new(color && output.is_none()).render_tree(&entries, format)?;
            presenter(output).present(&rendered)?;
            Ok(ExitCode::Success)
        }
        Command::Projects { format } => {
            WalkTreeUseCase::new(engine).execute().await;
            let projects = engine.cached_projects();
            if projects.is_empty() && format == OutputFormat::Text {
                eprintln!("No Maven project found below the workspace folders.");
                return Ok(ExitCode::Success);
            }
            let rendered = TreeRenderer::new(color).render_projects(&projects, format)?;
            presenter(None).present(&rendered)?;
            Ok(ExitCode::Success)
        }
        Command::Goal { goal, pom } => {
            let project = select_project(engine, pom.as_deref()).await?;
            let use_case =
                RunGoalUseCase::new(runner, StderrProgressReporter::new(), &settings.executable);
            Ok(build_status(use_case.execute(&project, &goal).await?))
        }
        Command::Custom {
            pom,
            pick,
            edit,
            command,
        } => {
            let project = select_project(engine, pom.as_deref()).await?;
            let use_case = CustomGoalUseCase::new(
                FileHistoryRepository::new(&settings.cache_dir, settings.history_limit),
                runner,
                StderrProgressReporter::new(),
                &settings.executable,
            );

            if edit {
                println!("{}", use_case.history_path(&project).display());
                return Ok(ExitCode::Success);
            }
            if let Some(position) = pick {
                return Ok(build_status(use_case.rerun(&project, position).await?));
            }
            if command.is_empty() {
                let history = use_case.history(&project).await;
                print_history(history.entries(), &project);
                return Ok(ExitCode::Success);
            }
            Ok(build_status(use_case.execute(&project, &command.join(" ")).await?))
        }
        Command::History { pom } => {
            let project = select_project(engine, pom.as_deref()).await?;
            let use_case = CustomGoalUseCase::new(
                FileHistoryRepository::new(&settings.cache_dir, settings.history_limit),
                runner,
                StderrProgressReporter::new(),
                &settings.executable,
            );
            let history = use_case.history(&project).await;
            print_history(history.entries(), &project);
            Ok(ExitCode::Success)
        }
        Command::EffectivePom { pom, output } => {
            let project = select_project(engine, pom.as_deref()).await?;
            let use_case = EffectivePomUseCase::new(
                runner,
                StderrProgressReporter::new(),
                &settings.executable,
                settings.effective_pom_dir(),
            );
            let xml = use_case.execute(project.descriptor_path()).await?;
            presenter(output).present(&xml)?;
            Ok(ExitCode::Success)
        }
        Command::Archetype { action } => {
            let use_case = ArchetypeCatalogUseCase::new(
                HttpCatalogClient::new(settings.catalog_timeout)?,
                FileCatalogStore::new(&settings.cache_dir, settings.provided_catalog.clone()),
                runner,
                StderrProgressReporter::new(),
                &settings.remote_catalog_url,
                &settings.executable,
            );
            match action {
                ArchetypeCommand::List {
                    remote,
                    all,
                    format,
                } => {
                    let catalog = use_case.list(remote).await;
                    if catalog.archetypes.is_empty() && format == OutputFormat::Text {
                        eprintln!(
                            "No archetype catalog available.\n\n💡 Hint: Run `mvn-explorer archetype update` or pass --remote"
                        );
                        return Ok(ExitCode::Success);
                    }
                    let rendered = CatalogRenderer::new(color, all).render(&catalog.archetypes, format)?;
                    presenter(None).present(&rendered)?;
                    Ok(ExitCode::Success)
                }
                ArchetypeCommand::Update => {
                    use_case.update().await?;
                    Ok(ExitCode::Success)
                }
                ArchetypeCommand::Generate {
                    group_id,
                    artifact_id,
                    version,
                    dest,
                } => {
                    let request = ArchetypeRequest::new(group_id, artifact_id, version, dest);
                    Ok(build_status(use_case.generate(&request).await?))
                }
            }
        }
    }
}

fn presenter(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
    match output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    }
}

fn build_status(success: bool) -> ExitCode {
    if success {
        ExitCode::Success
    } else {
        ExitCode::BuildFailed
    }
}

fn print_history(entries: &[String], project: &ProjectNode) {
    if entries.is_empty() {
        eprintln!(
            "No custom commands recorded for {} yet.\n\n💡 Hint: mvn-explorer custom <POM> -- <goals>",
            project.label()
        );
        return;
    }
    for (index, entry) in entries.iter().enumerate() {
        println!("{:>3}  {}", index + 1, entry);
    }
}

/// Finds the project a command applies to
///
/// A directory argument means its `pom.xml`. Without an argument the
/// workspace must contain exactly one project.
async fn select_project(engine: &Engine, pom: Option<&Path>) -> Result<Arc<ProjectNode>> {
    if let Some(path) = pom {
        let descriptor = if path.is_dir() {
            path.join(DESCRIPTOR_FILENAME)
        } else {
            path.to_path_buf()
        };
        return engine.project_for_descriptor(&descriptor).await;
    }

    WalkTreeUseCase::new(engine).execute().await;
    let mut projects = engine.cached_projects();
    match projects.len() {
        1 => Ok(projects.remove(0)),
        0 => Err(ExplorerError::ProjectNotFound {
            path: engine
                .settings()
                .workspace_folders
                .first()
                .cloned()
                .unwrap_or_default(),
        }
        .into()),
        count => Err(ExplorerError::ProjectSelectionRequired { count }.into()),
    }
}
