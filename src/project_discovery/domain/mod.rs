pub mod archetype;
pub mod command_history;
pub mod descriptor;
pub mod tree_node;

pub use archetype::Archetype;
pub use command_history::{CommandHistory, DEFAULT_HISTORY_LIMIT};
pub use descriptor::{ParentCoordinates, PomDocument, DESCRIPTOR_FILENAME};
pub use tree_node::{
    Icon, ModuleGroupNode, NodeKind, ProjectNode, TreeNode, WorkspaceRoot, MODULE_GROUP_LABEL,
};
