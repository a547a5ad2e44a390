use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mvn_explorer::application::dto::OutputFormat;
use mvn_explorer::project_discovery::services::DEFAULT_GOALS;

/// Explore the Maven projects of your workspace and run their goals
#[derive(Parser, Debug)]
#[command(name = "mvn-explorer")]
#[command(version)]
#[command(about = "Explore the Maven projects of your workspace and run their goals", long_about = None)]
pub struct Args {
    /// Workspace folder to scan for pom.xml files (defaults to the current directory).
    /// Can be specified multiple times: -w ./services -w ./libs
    #[arg(short, long = "workspace", value_name = "DIR", global = true)]
    pub workspaces: Vec<PathBuf>,

    /// Path to config file (auto-discovers mvn-explorer.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// How deep below a workspace folder pom.xml files are searched (-1 = unlimited)
    #[arg(long, value_name = "DEPTH", allow_negative_numbers = true, global = true)]
    pub max_depth: Option<i32>,

    /// Maven executable to run (default: mvn)
    #[arg(long, value_name = "PATH", global = true)]
    pub executable: Option<String>,

    /// Directory for command history, downloaded catalogs and effective POMs
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Print the Maven command lines instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the project tree of every workspace folder
    Tree {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the discovered projects
    Projects {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Run a goal (e.g. clean, install, "clean package") on a project
    Goal {
        /// Goal(s) to run
        #[arg(long_help = lifecycle_goals_help())]
        goal: String,

        /// pom.xml of the project, or its directory
        pom: Option<PathBuf>,
    },

    /// Run a custom command on a project and remember it
    ///
    /// Without a command the project's recent commands are listed.
    /// Example: mvn-explorer custom ./app -- clean package -DskipTests
    Custom {
        /// pom.xml of the project, or its directory
        pom: Option<PathBuf>,

        /// Run the N-th most recent command again
        #[arg(long, value_name = "N", conflicts_with = "command")]
        pick: Option<usize>,

        /// Print the history file path so it can be edited
        #[arg(long, conflicts_with_all = ["command", "pick"])]
        edit: bool,

        /// Goals and flags handed to Maven
        #[arg(last = true, value_name = "COMMAND")]
        command: Vec<String>,
    },

    /// Show the recent custom commands of a project
    History {
        /// pom.xml of the project, or its directory
        pom: Option<PathBuf>,
    },

    /// Generate and print the effective POM of a project
    EffectivePom {
        /// pom.xml of the project, or its directory
        pom: Option<PathBuf>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Work with Maven archetypes
    Archetype {
        #[command(subcommand)]
        action: ArchetypeCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ArchetypeCommand {
    /// List known archetypes
    List {
        /// Also download the remote catalog
        #[arg(long)]
        remote: bool,

        /// Show every known version instead of the latest
        #[arg(long)]
        all: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Download the remote catalog into the local cache
    Update,

    /// Generate a new project from an archetype
    Generate {
        #[arg(long)]
        group_id: String,

        #[arg(long)]
        artifact_id: String,

        #[arg(long)]
        version: Option<String>,

        /// Directory the project is generated in
        #[arg(long, default_value = ".")]
        dest: PathBuf,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn lifecycle_goals_help() -> String {
    format!(
        "Goal(s) to run, quoted when there are several.\nLifecycle goals: {}",
        DEFAULT_GOALS.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_goal_with_global_flags() {
        let args = Args::try_parse_from([
            "mvn-explorer",
            "goal",
            "clean install",
            "app/pom.xml",
            "--max-depth",
            "-1",
            "-w",
            "/ws",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(args.max_depth, Some(-1));
        assert_eq!(args.workspaces, vec![PathBuf::from("/ws")]);
        assert!(args.dry_run);
        match args.command {
            Command::Goal { goal, pom } => {
                assert_eq!(goal, "clean install");
                assert_eq!(pom, Some(PathBuf::from("app/pom.xml")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_custom_command_after_separator() {
        let args = Args::try_parse_from([
            "mvn-explorer",
            "custom",
            "app",
            "--",
            "clean",
            "package",
            "-DskipTests",
        ])
        .unwrap();

        match args.command {
            Command::Custom {
                pom, command, pick, edit,
            } => {
                assert_eq!(pom, Some(PathBuf::from("app")));
                assert_eq!(command, vec!["clean", "package", "-DskipTests"]);
                assert!(pick.is_none());
                assert!(!edit);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_custom_edit_conflicts_with_command() {
        let result = Args::try_parse_from(["mvn-explorer", "custom", "--edit", "--", "clean"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_tree_json_format() {
        let args = Args::try_parse_from(["mvn-explorer", "tree", "--format", "json"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Tree {
                format: OutputFormat::Json,
                output: None
            }
        ));
    }

    #[test]
    fn test_goal_help_lists_lifecycle_goals() {
        let help = lifecycle_goals_help();
        assert!(help.contains("clean, validate, compile"));
        assert!(help.ends_with("deploy"));
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Args::try_parse_from(["mvn-explorer", "tree", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_parse_archetype_generate() {
        let args = Args::try_parse_from([
            "mvn-explorer",
            "archetype",
            "generate",
            "--group-id",
            "org.apache.maven.archetypes",
            "--artifact-id",
            "maven-archetype-quickstart",
        ])
        .unwrap();

        match args.command {
            Command::Archetype {
                action:
                    ArchetypeCommand::Generate {
                        group_id,
                        artifact_id,
                        version,
                        dest,
                    },
            } => {
                assert_eq!(group_id, "org.apache.maven.archetypes");
                assert_eq!(artifact_id, "maven-archetype-quickstart");
                assert!(version.is_none());
                assert_eq!(dest, PathBuf::from("."));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
