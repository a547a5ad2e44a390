use serde::Serialize;

/// Well-known filename of a Maven build descriptor
pub const DESCRIPTOR_FILENAME: &str = "pom.xml";

/// Coordinates of the `<parent>` element of a descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParentCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ParentCoordinates {
    pub fn is_empty(&self) -> bool {
        self.group_id.is_empty() && self.artifact_id.is_empty() && self.version.is_empty()
    }
}

/// Typed view of a `pom.xml` with just enough structure to build the tree
///
/// Missing coordinates are kept as empty strings: a descriptor without an
/// `artifactId` is still worth showing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PomDocument {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: String,
    #[serde(skip_serializing_if = "ParentCoordinates::is_empty")]
    pub parent: ParentCoordinates,
    /// Declared submodule paths, relative to the descriptor's directory
    pub modules: Vec<String>,
}

impl PomDocument {
    pub fn has_modules(&self) -> bool {
        !self.modules.is_empty()
    }

    /// Group id for display purposes; falls back to the parent's group id
    /// since child modules routinely omit their own.
    pub fn display_group_id(&self) -> &str {
        if self.group_id.is_empty() {
            &self.parent.group_id
        } else {
            &self.group_id
        }
    }
}
