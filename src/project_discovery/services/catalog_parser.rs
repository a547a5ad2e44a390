use super::xml_reader::{self, path_ends_with, ParseError, XmlVisit};
use crate::project_discovery::domain::Archetype;

/// CatalogParser service reading `archetype-catalog.xml` documents
///
/// Every `<archetype>` element becomes one entry. Entries without a group
/// or artifact id cannot be generated from and are skipped.
pub struct CatalogParser;

impl CatalogParser {
    pub fn parse(xml: &str) -> Result<Vec<Archetype>, ParseError> {
        let mut archetypes = Vec::new();
        let mut current: Option<Archetype> = None;

        xml_reader::walk(xml, |visit| match visit {
            XmlVisit::Open(path) => {
                if path.last().is_some_and(|name| name == "archetype") {
                    current = Some(Archetype::default());
                }
            }
            XmlVisit::Close(path, text) => {
                if path.last().is_some_and(|name| name == "archetype") {
                    if let Some(archetype) = current.take() {
                        if !archetype.group_id.is_empty() && !archetype.artifact_id.is_empty() {
                            archetypes.push(archetype);
                        }
                    }
                    return;
                }
                let Some(archetype) = current.as_mut() else {
                    return;
                };
                if text.is_empty() {
                    return;
                }
                if path_ends_with(path, &["archetype", "groupId"]) {
                    archetype.group_id = text.to_string();
                } else if path_ends_with(path, &["archetype", "artifactId"]) {
                    archetype.artifact_id = text.to_string();
                } else if path_ends_with(path, &["archetype", "repository"]) {
                    archetype.repository = Some(text.to_string());
                } else if path_ends_with(path, &["archetype", "description"]) {
                    archetype.description = Some(text.to_string());
                } else if path_ends_with(path, &["archetype", "version"])
                    || path_ends_with(path, &["archetype", "versions", "version"])
                {
                    if !archetype.versions.iter().any(|v| v == text) {
                        archetype.versions.push(text.to_string());
                    }
                }
            }
        })?;

        Ok(archetypes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_entries() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<archetype-catalog xmlns="http://maven.apache.org/plugins/maven-archetype-plugin/archetype-catalog/1.0.0">
  <archetypes>
    <archetype>
      <groupId>org.apache.maven.archetypes</groupId>
      <artifactId>maven-archetype-quickstart</artifactId>
      <version>1.4</version>
      <description>An archetype which contains a sample Maven project.</description>
    </archetype>
    <archetype>
      <groupId>org.apache.maven.archetypes</groupId>
      <artifactId>maven-archetype-webapp</artifactId>
      <version>1.4</version>
      <repository>https://repo.maven.apache.org/maven2</repository>
    </archetype>
  </archetypes>
</archetype-catalog>"#;

        let archetypes = CatalogParser::parse(xml).unwrap();
        assert_eq!(archetypes.len(), 2);
        assert_eq!(archetypes[0].artifact_id, "maven-archetype-quickstart");
        assert_eq!(archetypes[0].versions, vec!["1.4"]);
        assert_eq!(
            archetypes[0].description.as_deref(),
            Some("An archetype which contains a sample Maven project.")
        );
        assert!(archetypes[0].repository.is_none());
        assert_eq!(
            archetypes[1].repository.as_deref(),
            Some("https://repo.maven.apache.org/maven2")
        );
    }

    #[test]
    fn test_parse_skips_incomplete_entries() {
        let xml = "<archetype-catalog><archetypes>\
            <archetype><artifactId>no-group</artifactId></archetype>\
            <archetype><groupId>g</groupId><artifactId>ok</artifactId></archetype>\
            </archetypes></archetype-catalog>";
        let archetypes = CatalogParser::parse(xml).unwrap();
        assert_eq!(archetypes.len(), 1);
        assert_eq!(archetypes[0].artifact_id, "ok");
        assert!(archetypes[0].versions.is_empty());
    }

    #[test]
    fn test_parse_nested_versions_list() {
        let xml = "<archetype-catalog><archetypes><archetype>\
            <groupId>g</groupId><artifactId>a</artifactId>\
            <versions><version>1.0</version><version>2.0</version></versions>\
            </archetype></archetypes></archetype-catalog>";
        let archetypes = CatalogParser::parse(xml).unwrap();
        assert_eq!(archetypes[0].versions, vec!["1.0", "2.0"]);
    }

    #[test]
    fn test_parse_empty_catalog() {
        assert!(CatalogParser::parse("<archetype-catalog/>").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_catalog() {
        assert!(CatalogParser::parse("<archetype-catalog><archetypes>").is_err());
    }
}
