use std::path::PathBuf;

/// Coordinates of the archetype to generate a project from, as entered by
/// the user (not validated yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeRequest {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    /// Directory the new project is generated in
    pub destination: PathBuf,
}

impl ArchetypeRequest {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
        destination: PathBuf,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
            destination,
        }
    }
}
