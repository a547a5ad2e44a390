use crate::project_discovery::policies::MruPolicy;

/// Default number of custom commands remembered per project
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Custom commands previously run against one project, most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    limit: usize,
}

impl CommandHistory {
    pub fn empty(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Builds a history from raw lines, normalizing and bounding them
    pub fn from_lines<I>(lines: I, limit: usize) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let limit = limit.max(1);
        Self {
            entries: MruPolicy::normalize(lines, limit),
            limit,
        }
    }

    /// Returns a new history with `item` moved (or inserted) to the front.
    /// A blank item leaves the history unchanged.
    pub fn promote(&self, item: &str) -> Self {
        let item = item.trim();
        if item.is_empty() {
            return self.clone();
        }
        Self {
            entries: MruPolicy::promote(&self.entries, item, self.limit),
            limit: self.limit,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// One entry per line, newline terminated
    pub fn to_file_content(&self) -> String {
        let mut content = self.entries.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        content
    }
}
