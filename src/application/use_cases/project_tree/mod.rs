use crate::ports::inbound::ProjectTreePort;
use crate::ports::outbound::{DescriptorReader, DescriptorScanner, TreeObserver};
use crate::project_discovery::domain::{
    ModuleGroupNode, ProjectNode, TreeNode, WorkspaceRoot, DESCRIPTOR_FILENAME,
};
use crate::project_discovery::services::DescriptorParser;
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::join_all;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// What the engine scans and how deep
#[derive(Debug, Clone)]
pub struct TreeSettings {
    pub workspace_folders: Vec<PathBuf>,
    pub descriptor_filename: String,
    /// Negative means unbounded
    pub max_depth: i32,
}

impl TreeSettings {
    pub fn new(workspace_folders: Vec<PathBuf>, max_depth: i32) -> Self {
        Self {
            workspace_folders,
            descriptor_filename: DESCRIPTOR_FILENAME.to_string(),
            max_depth,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedProject {
    generation: u64,
    node: Arc<ProjectNode>,
}

/// ProjectTreeUseCase - the project tree engine
///
/// Answers lazy expansion requests by scanning for descriptors, parsing them
/// and turning declared modules into child nodes. Every project handed out
/// is registered in a discovery cache keyed by canonical descriptor path, so
/// the same descriptor reached twice within one generation yields the same
/// node.
///
/// Cache entries are tagged with the generation that produced them.
/// `refresh()` bumps the generation before clearing, so an expansion that
/// was still in flight can neither see nor leave behind entries that
/// survive into the new generation.
///
/// # Type Parameters
/// * `S` - DescriptorScanner implementation
/// * `R` - DescriptorReader implementation
/// * `O` - TreeObserver implementation
pub struct ProjectTreeUseCase<S, R, O> {
    scanner: S,
    reader: R,
    observer: O,
    settings: TreeSettings,
    cache: DashMap<PathBuf, CachedProject>,
    generation: AtomicU64,
}

impl<S, R, O> ProjectTreeUseCase<S, R, O>
where
    S: DescriptorScanner,
    R: DescriptorReader,
    O: TreeObserver,
{
    pub fn new(scanner: S, reader: R, observer: O, settings: TreeSettings) -> Self {
        Self {
            scanner,
            reader,
            observer,
            settings,
            cache: DashMap::new(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn settings(&self) -> &TreeSettings {
        &self.settings
    }

    pub fn list_roots(&self) -> Vec<WorkspaceRoot> {
        self.settings
            .workspace_folders
            .iter()
            .map(|folder| WorkspaceRoot::from_path(folder.clone()))
            .collect()
    }

    pub async fn expand(&self, node: &TreeNode) -> Vec<TreeNode> {
        let projects = match node {
            TreeNode::WorkspaceRoot(root) => self.expand_workspace(root).await,
            TreeNode::Project(project) => {
                if project.document().has_modules() {
                    return vec![TreeNode::ModuleGroup(ModuleGroupNode::new(project.clone()))];
                }
                return Vec::new();
            }
            TreeNode::ModuleGroup(group) => self.expand_modules(group).await,
        };
        projects.into_iter().map(TreeNode::Project).collect()
    }

    pub fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.cache.clear();
        tracing::debug!(generation, "project tree refreshed");
        self.observer.tree_changed(generation);
    }

    /// Projects discovered so far in the current generation, by path
    pub fn cached_projects(&self) -> Vec<Arc<ProjectNode>> {
        let generation = self.generation();
        let mut projects: Vec<Arc<ProjectNode>> = self
            .cache
            .iter()
            .filter(|entry| entry.generation == generation)
            .map(|entry| entry.node.clone())
            .collect();
        projects.sort_by(|a, b| a.descriptor_path().cmp(b.descriptor_path()));
        projects
    }

    /// Loads the project for one descriptor path outside of the tree
    ///
    /// # Errors
    /// Returns an error if there is no descriptor at `path` or it cannot be
    /// read or parsed
    pub async fn project_for_descriptor(&self, path: &Path) -> Result<Arc<ProjectNode>> {
        let generation = self.generation();
        let source = self
            .reader
            .read_descriptor(path)
            .await?
            .ok_or_else(|| ExplorerError::ProjectNotFound {
                path: path.to_path_buf(),
            })?;

        if let Some(cached) = self.cached(&source.canonical_path, generation) {
            return Ok(cached);
        }

        let document = DescriptorParser::parse(&source.content).map_err(|e| {
            ExplorerError::DescriptorParseError {
                path: source.canonical_path.clone(),
                details: e.to_string(),
            }
        })?;
        let project = Arc::new(ProjectNode::new(source.canonical_path, document));
        Ok(self
            .register(generation, vec![project.clone()])
            .pop()
            .unwrap_or(project))
    }

    async fn expand_workspace(&self, root: &WorkspaceRoot) -> Vec<Arc<ProjectNode>> {
        let generation = self.generation();
        let paths = match self
            .scanner
            .scan(
                root.path(),
                &self.settings.descriptor_filename,
                self.settings.max_depth,
            )
            .await
        {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!(
                    "{}",
                    ExplorerError::ScanError {
                        path: root.path().to_path_buf(),
                        details: e.to_string(),
                    }
                );
                return Vec::new();
            }
        };
        tracing::debug!(root = %root.path().display(), found = paths.len(), "workspace scanned");

        let loaded = join_all(paths.iter().map(|path| self.load_project(path))).await;
        let mut projects = dedup_by_path(loaded.into_iter().flatten());
        projects.sort_by(|a, b| a.descriptor_path().cmp(b.descriptor_path()));
        self.register(generation, projects)
    }

    async fn expand_modules(&self, group: &ModuleGroupNode) -> Vec<Arc<ProjectNode>> {
        let generation = self.generation();
        let project_dir = group.owner().project_dir();

        let candidates: Vec<(&str, PathBuf)> = group
            .modules()
            .iter()
            .map(|module| {
                let path = self.module_descriptor_path(project_dir, module);
                (module.as_str(), path)
            })
            .collect();

        let loaded = join_all(candidates.iter().map(|(module, path)| async move {
            let project = self.load_project(path).await;
            if project.is_none() {
                tracing::debug!(
                    "{}",
                    ExplorerError::DanglingModuleReference {
                        module: module.to_string(),
                        path: path.clone(),
                    }
                );
            }
            project
        }))
        .await;

        self.register(generation, dedup_by_path(loaded.into_iter().flatten()))
    }

    /// A module entry names a directory holding the descriptor, or (less
    /// commonly) the descriptor file itself.
    fn module_descriptor_path(&self, project_dir: &Path, module: &str) -> PathBuf {
        let target = project_dir.join(module.trim());
        let names_file = target
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if names_file {
            target
        } else {
            target.join(&self.settings.descriptor_filename)
        }
    }

    async fn load_project(&self, path: &Path) -> Option<Arc<ProjectNode>> {
        let source = match self.reader.read_descriptor(path).await {
            Ok(Some(source)) => source,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping unreadable descriptor: {}", e);
                return None;
            }
        };

        match DescriptorParser::parse(&source.content) {
            Ok(document) => Some(Arc::new(ProjectNode::new(source.canonical_path, document))),
            Err(e) => {
                tracing::warn!(
                    "{}",
                    ExplorerError::DescriptorParseError {
                        path: source.canonical_path,
                        details: e.to_string(),
                    }
                );
                None
            }
        }
    }

    fn cached(&self, path: &Path, generation: u64) -> Option<Arc<ProjectNode>> {
        self.cache
            .get(path)
            .filter(|entry| entry.generation == generation)
            .map(|entry| entry.node.clone())
    }

    /// Registers freshly loaded projects, substituting nodes already cached
    /// in this generation. Results of a generation that has since been
    /// refreshed are dropped.
    fn register(&self, generation: u64, projects: Vec<Arc<ProjectNode>>) -> Vec<Arc<ProjectNode>> {
        if self.generation() != generation {
            tracing::debug!(generation, "discarding results of a stale generation");
            return Vec::new();
        }

        let registered: Vec<Arc<ProjectNode>> = projects
            .into_iter()
            .map(|project| {
                match self.cache.entry(project.descriptor_path().to_path_buf()) {
                    Entry::Occupied(entry) if entry.get().generation == generation => {
                        entry.get().node.clone()
                    }
                    Entry::Occupied(mut entry) => {
                        entry.insert(CachedProject {
                            generation,
                            node: project.clone(),
                        });
                        project
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(CachedProject {
                            generation,
                            node: project.clone(),
                        });
                        project
                    }
                }
            })
            .collect();

        if self.generation() != generation {
            tracing::debug!(generation, "discarding results of a stale generation");
            return Vec::new();
        }
        registered
    }
}

fn dedup_by_path<I>(projects: I) -> Vec<Arc<ProjectNode>>
where
    I: IntoIterator<Item = Arc<ProjectNode>>,
{
    let mut seen = HashSet::new();
    projects
        .into_iter()
        .filter(|project| seen.insert(project.descriptor_path().to_path_buf()))
        .collect()
}

#[async_trait]
impl<S, R, O> ProjectTreePort for ProjectTreeUseCase<S, R, O>
where
    S: DescriptorScanner,
    R: DescriptorReader,
    O: TreeObserver,
{
    fn list_roots(&self) -> Vec<WorkspaceRoot> {
        ProjectTreeUseCase::list_roots(self)
    }

    async fn expand(&self, node: &TreeNode) -> Vec<TreeNode> {
        ProjectTreeUseCase::expand(self, node).await
    }

    fn refresh(&self) {
        ProjectTreeUseCase::refresh(self)
    }
}
