use crate::application::dto::{OutputFormat, TreeEntry};
use crate::project_discovery::domain::{Icon, ProjectNode, TreeNode};
use crate::shared::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TreeJson {
    kind: &'static str,
    label: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectJson<'a> {
    group_id: &'a str,
    artifact_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    packaging: Option<&'a str>,
    path: String,
    modules: &'a [String],
}

/// TreeRenderer adapter turning walked tree entries into terminal text or JSON
pub struct TreeRenderer {
    color: bool,
}

impl TreeRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render_tree(&self, entries: &[TreeEntry], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.tree_text(entries)),
            OutputFormat::Json => {
                let mut index = 0;
                let nested = nest(entries, &mut index, 0);
                Ok(serde_json::to_string_pretty(&nested)?)
            }
        }
    }

    pub fn render_projects(&self, projects: &[Arc<ProjectNode>], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(projects
                .iter()
                .map(|p| {
                    format!(
                        "{}  {}",
                        self.paint_label(&format!("{}:{}", p.group_id(), p.label())),
                        self.paint_path(&p.descriptor_path().display().to_string())
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                let views: Vec<ProjectJson<'_>> = projects
                    .iter()
                    .map(|p| {
                        let document = p.document();
                        ProjectJson {
                            group_id: p.group_id(),
                            artifact_id: p.artifact_id(),
                            version: non_empty(&document.version),
                            packaging: non_empty(&document.packaging),
                            path: p.descriptor_path().display().to_string(),
                            modules: &document.modules,
                        }
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&views)?)
            }
        }
    }

    fn tree_text(&self, entries: &[TreeEntry]) -> String {
        let mut lines = Vec::with_capacity(entries.len());
        // Whether the ancestor at each level (from depth 1) was a last child
        let mut last_flags: Vec<bool> = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = entries[i + 1..]
                .iter()
                .find(|next| next.depth <= entry.depth)
                .is_none_or(|next| next.depth < entry.depth);

            let mut line = String::new();
            if entry.depth > 0 {
                last_flags.truncate(entry.depth - 1);
                for &ancestor_last in &last_flags {
                    line.push_str(if ancestor_last { "    " } else { "│   " });
                }
                line.push_str(if is_last { "└── " } else { "├── " });
                last_flags.push(is_last);
            } else {
                last_flags.clear();
            }

            line.push_str(icon_glyph(entry.node.icon()));
            line.push(' ');
            line.push_str(&self.node_text(&entry.node));
            lines.push(line);
        }

        lines.join("\n")
    }

    fn node_text(&self, node: &TreeNode) -> String {
        match node {
            TreeNode::WorkspaceRoot(root) => format!(
                "{}  {}",
                self.paint_label(root.name()),
                self.paint_path(&root.path().display().to_string())
            ),
            TreeNode::Project(project) => format!(
                "{}  {}",
                self.paint_label(project.label()),
                self.paint_path(&project.descriptor_path().display().to_string())
            ),
            TreeNode::ModuleGroup(_) => node.label().to_string(),
        }
    }

    fn paint_label(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_path(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            format!("({})", text)
        }
    }
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Workspace => "🗂",
        Icon::Project => "📦",
        Icon::Folder => "📁",
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Rebuilds the hierarchy from a depth-first listing
fn nest(entries: &[TreeEntry], index: &mut usize, depth: usize) -> Vec<TreeJson> {
    let mut nodes = Vec::new();
    while let Some(entry) = entries.get(*index) {
        if entry.depth != depth {
            break;
        }
        *index += 1;
        let node = &entry.node;
        nodes.push(TreeJson {
            kind: node.kind().context_value(),
            label: node.label().to_string(),
            path: node.path().display().to_string(),
            group_id: node.as_project().map(|p| p.group_id().to_string()),
            children: nest(entries, index, depth + 1),
        });
    }
    nodes
}
