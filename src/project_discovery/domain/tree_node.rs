use super::descriptor::PomDocument;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Label of the synthetic node grouping a project's submodules
pub const MODULE_GROUP_LABEL: &str = "Modules";

/// Icon reference handed to the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Workspace,
    Project,
    Folder,
}

/// Discriminator of a tree node, also used as the UI context value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    WorkspaceRoot,
    Project,
    ModuleGroup,
}

impl NodeKind {
    pub fn context_value(&self) -> &'static str {
        match self {
            NodeKind::WorkspaceRoot => "WorkspaceItem",
            NodeKind::Project => "mavenProject",
            NodeKind::ModuleGroup => "Modules",
        }
    }
}

/// One configured workspace folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    name: String,
    path: PathBuf,
}

impl WorkspaceRoot {
    /// Builds a root named after the folder's last path component
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A discovered Maven project
///
/// Immutable once built; the engine shares it behind an `Arc` between the
/// tree and the discovery cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    descriptor_path: PathBuf,
    document: PomDocument,
}

impl ProjectNode {
    /// `descriptor_path` must already be canonical
    pub fn new(descriptor_path: PathBuf, document: PomDocument) -> Self {
        Self {
            descriptor_path,
            document,
        }
    }

    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// Directory holding the descriptor, against which modules resolve
    pub fn project_dir(&self) -> &Path {
        self.descriptor_path
            .parent()
            .unwrap_or(self.descriptor_path.as_path())
    }

    pub fn artifact_id(&self) -> &str {
        &self.document.artifact_id
    }

    pub fn group_id(&self) -> &str {
        self.document.display_group_id()
    }

    pub fn document(&self) -> &PomDocument {
        &self.document
    }

    pub fn label(&self) -> &str {
        if self.document.artifact_id.is_empty() {
            self.project_dir()
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("(unnamed)")
        } else {
            &self.document.artifact_id
        }
    }

    pub fn icon(&self) -> Icon {
        Icon::Project
    }

    /// Name of the terminal a build of this project runs in
    pub fn terminal_name(&self) -> String {
        format!("Maven-{}", self.document.artifact_id)
    }
}

/// Synthetic "Modules" node; its children are materialized on expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGroupNode {
    owner: Arc<ProjectNode>,
}

impl ModuleGroupNode {
    pub fn new(owner: Arc<ProjectNode>) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &ProjectNode {
        &self.owner
    }

    pub fn modules(&self) -> &[String] {
        &self.owner.document().modules
    }
}

/// Node of the project tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    WorkspaceRoot(WorkspaceRoot),
    Project(Arc<ProjectNode>),
    ModuleGroup(ModuleGroupNode),
}

impl TreeNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            TreeNode::WorkspaceRoot(_) => NodeKind::WorkspaceRoot,
            TreeNode::Project(_) => NodeKind::Project,
            TreeNode::ModuleGroup(_) => NodeKind::ModuleGroup,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TreeNode::WorkspaceRoot(root) => root.name(),
            TreeNode::Project(project) => project.label(),
            TreeNode::ModuleGroup(_) => MODULE_GROUP_LABEL,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            TreeNode::WorkspaceRoot(_) => Icon::Workspace,
            TreeNode::Project(project) => project.icon(),
            TreeNode::ModuleGroup(_) => Icon::Folder,
        }
    }

    /// Path shown next to the label
    pub fn path(&self) -> &Path {
        match self {
            TreeNode::WorkspaceRoot(root) => root.path(),
            TreeNode::Project(project) => project.descriptor_path(),
            TreeNode::ModuleGroup(group) => group.owner().descriptor_path(),
        }
    }

    /// Whether the UI should offer to expand this node
    pub fn is_expandable(&self) -> bool {
        match self {
            TreeNode::WorkspaceRoot(_) | TreeNode::ModuleGroup(_) => true,
            TreeNode::Project(project) => project.document().has_modules(),
        }
    }

    pub fn as_project(&self) -> Option<&Arc<ProjectNode>> {
        match self {
            TreeNode::Project(project) => Some(project),
            _ => None,
        }
    }
}
