use crate::project_discovery::domain::TreeNode;

/// One node of a fully walked tree, in depth-first order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// 0 for workspace roots
    pub depth: usize,
    pub node: TreeNode,
}

impl TreeEntry {
    pub fn new(depth: usize, node: TreeNode) -> Self {
        Self { depth, node }
    }
}
