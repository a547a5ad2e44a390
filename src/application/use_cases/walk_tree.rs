use crate::application::dto::TreeEntry;
use crate::ports::inbound::ProjectTreePort;
use crate::project_discovery::domain::TreeNode;
use futures::future::join_all;
use std::path::PathBuf;

/// WalkTreeUseCase - expands the whole project tree for non-interactive
/// front ends
///
/// Workspace roots are expanded concurrently; below them the walk is
/// depth-first so entries come out in display order. A project whose
/// descriptor already appears among its own ancestors is listed but not
/// expanded again, which keeps self-referencing module graphs finite.
pub struct WalkTreeUseCase<'a, P: ?Sized> {
    tree: &'a P,
}

struct Pending {
    depth: usize,
    node: TreeNode,
    ancestors: Vec<PathBuf>,
}

impl<'a, P> WalkTreeUseCase<'a, P>
where
    P: ProjectTreePort + ?Sized,
{
    pub fn new(tree: &'a P) -> Self {
        Self { tree }
    }

    pub async fn execute(&self) -> Vec<TreeEntry> {
        let roots: Vec<TreeNode> = self
            .tree
            .list_roots()
            .into_iter()
            .map(TreeNode::WorkspaceRoot)
            .collect();
        let expanded = join_all(roots.iter().map(|root| self.tree.expand(root))).await;

        let mut entries = Vec::new();
        for (root, children) in roots.into_iter().zip(expanded) {
            entries.push(TreeEntry::new(0, root));
            let mut stack: Vec<Pending> = children
                .into_iter()
                .rev()
                .map(|node| Pending {
                    depth: 1,
                    node,
                    ancestors: Vec::new(),
                })
                .collect();
            self.walk(&mut stack, &mut entries).await;
        }
        entries
    }

    async fn walk(&self, stack: &mut Vec<Pending>, entries: &mut Vec<TreeEntry>) {
        while let Some(Pending {
            depth,
            node,
            mut ancestors,
        }) = stack.pop()
        {
            let expand = match &node {
                TreeNode::Project(project) => {
                    let path = project.descriptor_path().to_path_buf();
                    if ancestors.contains(&path) {
                        tracing::warn!(path = %path.display(), "module cycle, not expanding again");
                        false
                    } else {
                        ancestors.push(path);
                        node.is_expandable()
                    }
                }
                _ => node.is_expandable(),
            };

            if expand {
                let children = self.tree.expand(&node).await;
                stack.extend(children.into_iter().rev().map(|child| Pending {
                    depth: depth + 1,
                    node: child,
                    ancestors: ancestors.clone(),
                }));
            }
            entries.push(TreeEntry::new(depth, node));
        }
    }
}
