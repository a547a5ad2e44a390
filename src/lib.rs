//! mvn-explorer - discover, browse and run Maven projects in a workspace
//!
//! This library finds `pom.xml` files at any depth below a set of workspace
//! folders, presents them as a lazily expanded project tree (projects, their
//! declared modules, nested modules) and runs Maven goals, custom commands,
//! effective-POM generation and archetype generation against them. It
//! follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`project_discovery`): Tree nodes, descriptor and catalog parsing, history policy
//! - **Application Layer** (`application`): Use cases, including the project tree engine
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_explorer::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create the engine with its adapters
//! let engine = ProjectTreeUseCase::new(
//!     WalkDirScanner::new(),
//!     FileSystemReader::new(),
//!     NoopTreeObserver,
//!     TreeSettings::new(vec![PathBuf::from(".")], -1),
//! );
//!
//! // Walk the whole tree
//! let entries = WalkTreeUseCase::new(&engine).execute().await;
//!
//! // Render it
//! let output = TreeRenderer::new(false).render_tree(&entries, OutputFormat::Text)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod project_discovery;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        CatalogRenderer, StderrProgressReporter, TreeRenderer,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileCatalogStore, FileHistoryRepository, FileSystemReader, FileSystemWriter,
        StdoutPresenter, WalkDirScanner,
    };
    pub use crate::adapters::outbound::network::HttpCatalogClient;
    pub use crate::adapters::outbound::process::{DryRunCommandRunner, ShellCommandRunner};
    pub use crate::application::dto::{ArchetypeRequest, OutputFormat, TreeEntry};
    pub use crate::application::use_cases::{
        ArchetypeCatalogUseCase, CustomGoalUseCase, EffectivePomUseCase, ProjectTreeUseCase,
        RunGoalUseCase, TreeSettings, WalkTreeUseCase,
    };
    pub use crate::ports::inbound::ProjectTreePort;
    pub use crate::ports::outbound::{
        CatalogStore, CommandRunner, DescriptorReader, DescriptorScanner, HistoryRepository,
        NoopTreeObserver, OutputPresenter, ProgressReporter, RemoteCatalogFetcher, TreeObserver,
    };
    pub use crate::project_discovery::domain::{
        Archetype, CommandHistory, ModuleGroupNode, PomDocument, ProjectNode, TreeNode,
        WorkspaceRoot,
    };
    pub use crate::project_discovery::services::{CatalogParser, CommandLine, DescriptorParser};
    pub use crate::shared::Result;
}
