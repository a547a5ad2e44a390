use crate::application::dto::OutputFormat;
use crate::project_discovery::domain::Archetype;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Renders archetype listings
///
/// Text output shows the newest known version unless `all_versions` is set.
pub struct CatalogRenderer {
    color: bool,
    all_versions: bool,
}

impl CatalogRenderer {
    pub fn new(color: bool, all_versions: bool) -> Self {
        Self {
            color,
            all_versions,
        }
    }

    pub fn render(&self, archetypes: &[Archetype], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(archetypes)?),
            OutputFormat::Text => Ok(archetypes
                .iter()
                .map(|a| self.line(a))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn line(&self, archetype: &Archetype) -> String {
        let label = if self.color {
            archetype.label().bold().to_string()
        } else {
            archetype.label()
        };

        let versions = if self.all_versions {
            archetype.versions.join(", ")
        } else {
            archetype.versions.last().cloned().unwrap_or_default()
        };

        let mut line = label;
        if !versions.is_empty() {
            line.push_str(&format!(" [{}]", versions));
        }
        if let Some(description) = archetype.description.as_deref() {
            let description = if self.color {
                description.dimmed().to_string()
            } else {
                description.to_string()
            };
            line.push_str(&format!(" - {}", description));
        }
        line
    }
}
