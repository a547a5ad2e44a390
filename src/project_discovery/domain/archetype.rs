use serde::{Deserialize, Serialize};

/// Project template listed in an archetype catalog
///
/// Identity is the `(group_id, artifact_id)` pair; everything else is
/// descriptive and merged across catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub versions: Vec<String>,
}

impl Archetype {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    pub fn key(&self) -> (&str, &str) {
        (&self.group_id, &self.artifact_id)
    }

    /// `groupId:artifactId`
    pub fn label(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Folds another entry with the same key into this one.
    ///
    /// Versions are appended in order without duplicates; descriptive fields
    /// are only taken from `other` while ours are still empty.
    pub fn merge(&mut self, other: Archetype) {
        for version in other.versions {
            if !self.versions.contains(&version) {
                self.versions.push(version);
            }
        }
        if is_blank(&self.description) && !is_blank(&other.description) {
            self.description = other.description;
        }
        if is_blank(&self.repository) && !is_blank(&other.repository) {
            self.repository = other.repository;
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let archetype = Archetype::new("org.apache.maven.archetypes", "maven-archetype-quickstart");
        assert_eq!(
            archetype.label(),
            "org.apache.maven.archetypes:maven-archetype-quickstart"
        );
    }

    #[test]
    fn test_merge_concatenates_versions_without_duplicates() {
        let mut first = Archetype {
            versions: vec!["1.0".to_string(), "1.1".to_string()],
            ..Archetype::new("org.x", "quickstart")
        };
        let second = Archetype {
            versions: vec!["1.1".to_string(), "2.0".to_string()],
            ..Archetype::new("org.x", "quickstart")
        };
        first.merge(second);
        assert_eq!(first.versions, vec!["1.0", "1.1", "2.0"]);
    }

    #[test]
    fn test_merge_keeps_first_non_empty_description() {
        let mut first = Archetype {
            description: Some("   ".to_string()),
            ..Archetype::new("org.x", "quickstart")
        };
        first.merge(Archetype {
            description: Some("Second".to_string()),
            repository: Some("https://repo.example".to_string()),
            ..Archetype::new("org.x", "quickstart")
        });
        first.merge(Archetype {
            description: Some("Third".to_string()),
            ..Archetype::new("org.x", "quickstart")
        });
        assert_eq!(first.description.as_deref(), Some("Second"));
        assert_eq!(first.repository.as_deref(), Some("https://repo.example"));
    }
}
