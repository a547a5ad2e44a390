use crate::project_discovery::domain::{TreeNode, WorkspaceRoot};
use async_trait::async_trait;

/// ProjectTreePort - Inbound port for browsing the project tree
///
/// This is the surface a tree view talks to: it asks for the roots, then
/// expands nodes lazily as the user opens them.
#[async_trait]
pub trait ProjectTreePort: Send + Sync {
    /// Currently configured workspace folders; empty when none are configured
    fn list_roots(&self) -> Vec<WorkspaceRoot>;

    /// Children of `node`
    ///
    /// Never fails: descriptors that cannot be read or parsed are simply
    /// missing from the result.
    async fn expand(&self, node: &TreeNode) -> Vec<TreeNode>;

    /// Drops everything discovered so far and starts a new generation
    fn refresh(&self);
}
